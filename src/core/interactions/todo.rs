use super::Task;
use crate::core::capability::TodoView;
use crate::utils::html;

pub fn todo(todo: &TodoView<'_>) -> String {
    let items = todo.items();
    let message = if items.is_empty() {
        html::paragraph("The list is empty currently")
    } else {
        format!(
            "{}{}",
            html::paragraph("Here is what's left: "),
            html::list("", items)
        )
    };
    format!(
        "{}{}{}",
        html::heading("Todo"),
        html::paragraph("I had a look at my todo and here were the items:"),
        message
    )
}

pub fn briefing(task: Task) -> String {
    let (title, lines) = match task {
        Task::LearnAboutSelfSufficiency => (
            "Objective: Learn About Self-sufficiency",
            &[
                "I need to visit the website I came across yesterday.",
                "To do that, I need to go to the internet.",
            ][..],
        ),
        Task::FindLand => (
            "Objective: Find Land",
            &[
                "Everything I read so far starts with a piece of land.",
                "The article linked to a website with plots for sale. I should look it up on the internet.",
            ][..],
        ),
        Task::TellMom => (
            "Objective: Tell Mom",
            &[
                "Before I do anything drastic, mom should hear about the plan from me.",
                "Her number is in my phone.",
            ][..],
        ),
    };
    format!(
        "{}{}",
        html::heading(title),
        html::each(lines.iter().copied(), html::paragraph)
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::starting_world;
    use crate::models::{EntityId, EntityStore};

    #[test]
    fn test_todo_lists_open_tasks() {
        let store = starting_world();
        let out = todo(&TodoView::new(&store));
        assert_eq!(
            out,
            "<h3>Todo</h3><p>I had a look at my todo and here were the items:</p>\
             <p>Here is what's left: </p><ul><li>Learn about self-sufficiency</li></ul>"
        );
    }

    #[test]
    fn test_todo_empty() {
        let mut store = starting_world();
        if let Some(todo) = store.get_mut(&EntityId::from(crate::content::ids::TODO)) {
            todo.entities.clear();
        }
        assert!(todo(&TodoView::new(&store)).ends_with("<p>The list is empty currently</p>"));

        let empty = EntityStore::new();
        assert!(todo(&TodoView::new(&empty)).contains("empty currently"));
    }

    #[test]
    fn test_briefing() {
        let out = briefing(Task::LearnAboutSelfSufficiency);
        assert_eq!(
            out,
            "<h3>Objective: Learn About Self-sufficiency</h3>\
             <p>I need to visit the website I came across yesterday.</p>\
             <p>To do that, I need to go to the internet.</p>"
        );
    }
}
