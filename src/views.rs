//! Stateless maud components. Each function maps todo data to a fragment
//! that htmx swaps into the live page.

use maud::{html, Markup, DOCTYPE};

use crate::models::Todo;

/// One todo row: content, a toggle checkbox and a delete button. Both
/// controls replace the whole row with the server's response; the delete
/// response is empty, which removes the row.
pub fn todo_item(todo: &Todo) -> Markup {
    html! {
        div class="flex flex-row space-x-3" {
            p { (todo.content) }
            input type="checkbox" checked[todo.completed]
                hx-post=(format!("/todos/toggle/{}", todo.id))
                hx-target="closest div"
                hx-swap="outerHTML";
            button class="text-red-500"
                hx-delete=(format!("/todos/{}", todo.id))
                hx-target="closest div"
                hx-swap="outerHTML" { "X" }
        }
    }
}

/// The create form. New items are inserted right before the form, and the
/// hyperscript attribute clears the input after each submission.
pub fn todo_form() -> Markup {
    html! {
        form class="flex flex-row space-x-3"
            hx-post="/todos"
            hx-swap="beforebegin"
            "_"="on submit target.reset()" {
            input type="text" name="content" class="border border-black";
            button type="submit" { "Add" }
        }
    }
}

pub fn todo_list(todos: &[Todo]) -> Markup {
    html! {
        div {
            @for todo in todos {
                (todo_item(todo))
            }
            (todo_form())
        }
    }
}

/// Document shell served by the root route. The body fetches the list
/// fragment as soon as the page loads.
pub fn page() -> Markup {
    html! {
        (DOCTYPE)
        html {
            head {
                title { "Todos" }
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1";
                script src="https://unpkg.com/htmx.org@1.9.6/dist/htmx.min.js" {}
                script src="https://cdn.tailwindcss.com/3.3.3" {}
                script src="https://unpkg.com/hyperscript.org@0.9.11/dist/_hyperscript.min.js" {}
            }
            body class="flex w-full h-screen justify-center items-center"
                hx-get="/todos"
                hx-trigger="load"
                hx-swap="innerHTML" {}
        }
    }
}
