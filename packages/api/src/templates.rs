//! Site templates, embedded at compile time.

use minijinja::Environment;

pub fn environment() -> Environment<'static> {
    let mut env = Environment::new();
    for (name, source) in [
        ("base.html", include_str!("../templates/base.html")),
        ("index.html", include_str!("../templates/index.html")),
        ("additem.html", include_str!("../templates/additem.html")),
    ] {
        env.add_template(name, source)
            .expect("Failed to parse embedded template");
    }
    env
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::forms::{FieldErrors, ItemSubmission, STORE_CHOICES, UNIT_CHOICES};
    use minijinja::context;

    #[test]
    fn item_form_renders_fields_and_choices() {
        let env = environment();
        let html = env
            .get_template("additem.html")
            .expect("template registered")
            .render(context! {
                values => ItemSubmission::default(),
                errors => FieldErrors::default(),
                stores => STORE_CHOICES,
                units => UNIT_CHOICES,
            })
            .expect("renders");

        assert!(html.contains("name=\"product\""));
        assert!(html.contains("name=\"price\""));
        assert!(html.contains("Woolworths"));
        assert!(html.contains("litres"));
        assert!(!html.contains("alert-danger"));
    }

    #[test]
    fn submitted_values_are_escaped_on_rerender() {
        let env = environment();
        let values = ItemSubmission {
            product: "<script>alert(1)</script>".to_string(),
            ..ItemSubmission::default()
        };
        let html = env
            .get_template("additem.html")
            .expect("template registered")
            .render(context! {
                values => values,
                errors => FieldErrors::default(),
                stores => STORE_CHOICES,
                units => UNIT_CHOICES,
            })
            .expect("renders");

        assert!(!html.contains("<script>alert(1)</script>"));
        assert!(html.contains("&lt;script&gt;"));
    }

    #[test]
    fn index_shows_notice_only_when_present() {
        let env = environment();
        let with_notice = env
            .get_template("index.html")
            .expect("template registered")
            .render(context! { notice => "item saved to database" })
            .expect("renders");
        assert!(with_notice.contains("item saved to database"));
        assert!(with_notice.contains("alert-success"));

        let without_notice = env
            .get_template("index.html")
            .expect("template registered")
            .render(context! { notice => Option::<String>::None })
            .expect("renders");
        assert!(!without_notice.contains("alert-success"));
    }
}
