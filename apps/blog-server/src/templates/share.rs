use maud::{Markup, html};

use blog_core::domain::Post;
use blog_shared::{EmailPostForm, FormErrors};

use super::layout::{self, field_errors};

/// Share page: the form, or the confirmation once the mail went out.
pub fn page(post: &Post, form: &EmailPostForm, errors: &FormErrors, sent: bool) -> Markup {
    layout::page(
        "Share a post",
        html! {
            @if sent {
                h1 { "E-mail successfully sent" }
                p {
                    "\"" (post.title) "\" was successfully sent to " (form.to) "."
                }
                p { a href=(post.absolute_path()) { "Back to the post" } }
            } @else {
                h1 { "Share \"" (post.title) "\" by e-mail" }
                form method="post" {
                    label for="id_name" { "Name:" }
                    (field_errors(errors, "name"))
                    input type="text" name="name" id="id_name" maxlength="25" value=(form.name);

                    label for="id_email" { "Email:" }
                    (field_errors(errors, "email"))
                    input type="email" name="email" id="id_email" value=(form.email);

                    label for="id_to" { "To:" }
                    (field_errors(errors, "to"))
                    input type="email" name="to" id="id_to" value=(form.to);

                    label for="id_comments" { "Comments:" }
                    textarea name="comments" id="id_comments" rows="4" {
                        (form.comments.as_deref().unwrap_or_default())
                    }

                    p { input type="submit" value="Send e-mail"; }
                }
            }
        },
    )
}
