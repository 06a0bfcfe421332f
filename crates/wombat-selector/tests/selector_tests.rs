//! Integration tests for selector chain building and validation.

use wombat_selector::{
    PartKind, Selector, SelectorError, attribute, class, element, id, pseudo_class, pseudo_element,
};

#[test]
fn test_entry_point_fragments() {
    assert_eq!(element("div").render(), "div");
    assert_eq!(id("main").render(), "#main");
    assert_eq!(class("container").render(), ".container");
    assert_eq!(attribute("href").render(), "[href]");
    assert_eq!(pseudo_class("hover").render(), ":hover");
    assert_eq!(pseudo_element("before").render(), "::before");
}

#[test]
fn test_full_canonical_chain() {
    let selector = element("input")
        .id("login")
        .unwrap()
        .class("wide")
        .unwrap()
        .attribute("type=password")
        .unwrap()
        .pseudo_class("focus")
        .unwrap()
        .pseudo_element("placeholder")
        .unwrap();
    assert_eq!(
        selector.render(),
        "input#login.wide[type=password]:focus::placeholder"
    );
}

#[test]
fn test_element_id_and_repeated_classes() {
    let selector = element("div")
        .id("main")
        .unwrap()
        .class("container")
        .unwrap()
        .class("draggable")
        .unwrap();
    assert_eq!(selector.render(), "div#main.container.draggable");
}

#[test]
fn test_attribute_expression_taken_verbatim() {
    let selector = element("a")
        .attribute(r#"href$=".png""#)
        .unwrap()
        .pseudo_class("focus")
        .unwrap();
    assert_eq!(selector.render(), r#"a[href$=".png"]:focus"#);
}

#[test]
fn test_duplicate_element_fails() {
    let chain = element("div");
    assert_eq!(chain.element("span"), Err(SelectorError::DuplicatePart));
}

#[test]
fn test_duplicate_id_fails() {
    let chain = element("div").id("main").unwrap();
    assert_eq!(chain.id("other"), Err(SelectorError::DuplicatePart));
}

#[test]
fn test_duplicate_pseudo_element_fails() {
    let chain = pseudo_element("before");
    assert_eq!(
        chain.pseudo_element("after"),
        Err(SelectorError::DuplicatePart)
    );
}

#[test]
fn test_id_after_class_fails_out_of_order() {
    let chain = element("div").class("container").unwrap();
    assert_eq!(chain.id("main"), Err(SelectorError::OutOfOrder));
}

#[test]
fn test_element_after_id_fails_out_of_order() {
    let chain = id("main");
    assert_eq!(chain.element("div"), Err(SelectorError::OutOfOrder));
}

#[test]
fn test_attribute_after_pseudo_class_fails_out_of_order() {
    let chain = element("a").pseudo_class("hover").unwrap();
    assert_eq!(chain.attribute("href"), Err(SelectorError::OutOfOrder));
}

#[test]
fn test_class_after_pseudo_element_fails_out_of_order() {
    let chain = pseudo_element("first-line");
    assert_eq!(chain.class("big"), Err(SelectorError::OutOfOrder));
}

#[test]
fn test_repeated_same_rank_keeps_rank() {
    let chain = element("li")
        .class("row")
        .unwrap()
        .class("odd")
        .unwrap()
        .class("selected")
        .unwrap();
    assert_eq!(chain.last_kind(), Some(PartKind::Class));
    // Rank 2 still allows rank 3 and above.
    let selector = chain.attribute("draggable").unwrap();
    assert_eq!(selector.render(), "li.row.odd.selected[draggable]");
}

#[test]
fn test_repeated_pseudo_classes() {
    let selector = element("input")
        .pseudo_class("focus")
        .unwrap()
        .pseudo_class("valid")
        .unwrap();
    assert_eq!(selector.render(), "input:focus:valid");
}

#[test]
fn test_error_messages() {
    assert_eq!(
        SelectorError::DuplicatePart.to_string(),
        "Element, id and pseudo-element should not occur more than one time inside the selector."
    );
    assert_eq!(
        SelectorError::OutOfOrder.to_string(),
        "Selector parts should be arranged in the following order: element, id, class, attribute, pseudo-class, pseudo-element."
    );
}

#[test]
fn test_chains_are_independent() {
    // Appends never mutate the receiver, so one intermediate value can
    // branch into several chains.
    let base = element("button").class("btn").unwrap();
    let primary = base.class("btn-primary").unwrap();
    let disabled = base.pseudo_class("disabled").unwrap();
    assert_eq!(base.as_str(), "button.btn");
    assert_eq!(primary.render(), "button.btn.btn-primary");
    assert_eq!(disabled.render(), "button.btn:disabled");
}

#[test]
fn test_fresh_chains_carry_no_residue() {
    let first = element("div").id("main").unwrap();
    assert_eq!(first.render(), "div#main");
    // A new chain from the same entry point starts from scratch: no text,
    // no rank, no uniqueness flags carried over.
    let second = element("span");
    assert_eq!(second.last_kind(), Some(PartKind::Element));
    assert_eq!(second.render(), "span");
    assert_eq!(element("p").id("intro").unwrap().render(), "p#intro");
}

#[test]
fn test_append_by_kind() {
    let selector = Selector::default()
        .append(PartKind::Element, "table")
        .unwrap()
        .append(PartKind::Class, "stats")
        .unwrap()
        .append(PartKind::PseudoClass, "hover")
        .unwrap();
    assert_eq!(selector.render(), "table.stats:hover");
}

#[test]
fn test_display_matches_render() {
    let selector = element("div").class("card").unwrap();
    assert_eq!(selector.to_string(), "div.card");
    assert_eq!(selector.to_string(), selector.render());
}

#[test]
fn test_selector_serializes_with_state() {
    let selector = element("div").id("main").unwrap();
    let json = serde_json::to_value(&selector).expect("selector should serialize");
    assert_eq!(json["text"], "div#main");
    assert_eq!(json["last"], "Id");
    assert_eq!(json["seen_element"], true);
    assert_eq!(json["seen_id"], true);
    assert_eq!(json["seen_pseudo_element"], false);
}
