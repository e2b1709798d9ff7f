//! Decorates a card component with a build-emitted class map, then
//! recomposes it from the call site: one render with the base classes,
//! one with a caller theme composed on.
//!
//! Run with: cargo run --example themed_card

use styleable::{FnComponent, Overrides, Props, Styleable};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // The class map as a CSS-modules build step would emit it.
    let styleable = Styleable::from_json(
        r#"{
            "card": "card_a1b2c",
            "title": "title_d3e4f",
            "body": "body_9g8h7"
        }"#,
    )?;

    let card = styleable.decorate(FnComponent::new(|css, props: &Props| {
        format!(
            "<div class=\"{}\">\n  <h2 class=\"{}\">{}</h2>\n  <p class=\"{}\">{}</p>\n</div>",
            css.class("card").unwrap_or_default(),
            css.class("title").unwrap_or_default(),
            props.get_str("title").unwrap_or_default(),
            css.class("body").unwrap_or_default(),
            props.get_str("body").unwrap_or_default(),
        )
    }));

    let props = Props::new()
        .set("title", "Composition")
        .set("body", "Same component, caller-supplied classes.");

    println!("Base classes:\n{}\n", card.render(&props)?);

    let themed = Overrides::new()
        .compose("card", "theme_dark")
        .set("title", "custom_title");
    println!("Recomposed:\n{}", card.render_with_css(&themed, &props)?);

    Ok(())
}
