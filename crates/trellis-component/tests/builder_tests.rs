//! Tests for the merge-and-build traversal: tree shape, override
//! precedence, style application, callback wiring, and dispatch.

use std::cell::Cell;
use std::rc::Rc;

use serde_json::json;

use trellis_component::{
    Component, ConfigNode, ContentSpec, ElementSpec, EventListenerSpec, StyleSpec, build_component,
    by_name, default_on_mouse_out_color, default_on_mouse_over_color, find_child_element,
    find_element,
};
use trellis_dom::Event;

/// Helper for a node with a tag element.
fn tagged(name: &str, tag: &str) -> ConfigNode {
    ConfigNode {
        element: Some(ElementSpec::Tag(tag.to_string())),
        ..ConfigNode::new(name)
    }
}

// ========== basic construction ==========

#[test]
fn test_scenario_root_div_with_button_child() {
    let defaults = vec![ConfigNode {
        children: vec![ConfigNode {
            content: Some(ContentSpec::Text("Click".to_string())),
            ..tagged("btn", "button")
        }],
        ..tagged("root", "div")
    }];

    let component = build_component(defaults, None, None, Vec::new());

    assert_eq!(component.final_config.len(), 1);
    let root = &component.final_config[0];
    assert_eq!(root.name, "root");
    assert_eq!(root.children.len(), 1);
    let btn = &root.children[0];
    assert_eq!(btn.name, "btn");

    let tree = &component.tree;
    assert_eq!(tree.get(root.element).unwrap().tag_name, "div");
    assert_eq!(tree.get(btn.element).unwrap().tag_name, "button");
    assert_eq!(tree.text(btn.element), Some("Click"));

    // The button element is attached under the root element.
    assert_eq!(tree.children(root.element), &[btn.element]);
    assert_eq!(tree.parent(btn.element), Some(root.element));
}

#[test]
fn test_name_propagates_to_id_attribute() {
    let defaults = vec![tagged("header", "h1")];
    let component = build_component(defaults, None, None, Vec::new());

    let node = &component.final_config[0];
    assert_eq!(node.name, "header");
    assert_eq!(component.tree.attribute(node.element, "id"), Some("header"));
}

#[test]
fn test_missing_element_defaults_to_div() {
    let defaults = vec![ConfigNode {
        content: Some(ContentSpec::Text("plain".to_string())),
        ..ConfigNode::new("loose")
    }];
    let component = build_component(defaults, None, None, Vec::new());

    let node = &component.final_config[0];
    assert_eq!(component.tree.get(node.element).unwrap().tag_name, "div");
    assert_eq!(component.tree.text(node.element), Some("plain"));
}

#[test]
fn test_empty_default_list_is_noop() {
    let component = build_component(Vec::new(), None, None, Vec::new());
    assert!(component.final_config.is_empty());
    assert!(component.tree.is_empty());
}

// ========== element spec dispatch ==========

#[test]
fn test_provided_element_used_as_is_without_content() {
    let defaults = vec![ConfigNode {
        element: Some(ElementSpec::Provided(Rc::new(|tree| {
            let id = tree.create_element("nav");
            tree.set_text(id, "preset");
            id
        }))),
        content: Some(ContentSpec::Text("ignored".to_string())),
        ..ConfigNode::new("menu")
    }];
    let component = build_component(defaults, None, None, Vec::new());

    let node = &component.final_config[0];
    assert_eq!(component.tree.get(node.element).unwrap().tag_name, "nav");
    // Content resolution does not touch a provided element.
    assert_eq!(component.tree.text(node.element), Some("preset"));
}

#[test]
fn test_tag_provider_supplies_tag_name() {
    let defaults = vec![ConfigNode {
        element: Some(ElementSpec::TagProvider(Rc::new(|| "section".to_string()))),
        ..ConfigNode::new("body")
    }];
    let component = build_component(defaults, None, None, Vec::new());

    let node = &component.final_config[0];
    assert_eq!(component.tree.get(node.element).unwrap().tag_name, "section");
}

#[test]
fn test_content_provider_invoked() {
    let defaults = vec![ConfigNode {
        content: Some(ContentSpec::Provider(Rc::new(|| "generated".to_string()))),
        ..tagged("label", "span")
    }];
    let component = build_component(defaults, None, None, Vec::new());

    let node = &component.final_config[0];
    assert_eq!(component.tree.text(node.element), Some("generated"));
}

// ========== override precedence ==========

#[test]
fn test_user_value_overrides_default() {
    let defaults = vec![ConfigNode {
        content: Some(ContentSpec::Text("Default".to_string())),
        ..tagged("btn", "button")
    }];
    let users = vec![ConfigNode {
        content: Some(ContentSpec::Text("Custom".to_string())),
        ..ConfigNode::new("btn")
    }];

    let component = build_component(defaults, Some(users), None, Vec::new());
    let node = &component.final_config[0];
    // User content wins; the element spec falls back to the default.
    assert_eq!(component.tree.get(node.element).unwrap().tag_name, "button");
    assert_eq!(component.tree.text(node.element), Some("Custom"));
}

#[test]
fn test_empty_user_node_is_identical_to_no_user_config() {
    let defaults = || {
        vec![ConfigNode {
            content: Some(ContentSpec::Text("Default".to_string())),
            style: Some(StyleSpec::Text("color: red".to_string())),
            ..tagged("btn", "button")
        }]
    };

    let with_empty_override =
        build_component(defaults(), Some(vec![ConfigNode::new("btn")]), None, Vec::new());
    let without_user = build_component(defaults(), None, None, Vec::new());

    let a = &with_empty_override.final_config[0];
    let b = &without_user.final_config[0];
    assert_eq!(a.name, b.name);
    assert_eq!(
        with_empty_override.tree.get(a.element).unwrap().tag_name,
        without_user.tree.get(b.element).unwrap().tag_name
    );
    assert_eq!(
        with_empty_override.tree.text(a.element),
        without_user.tree.text(b.element)
    );
    assert_eq!(
        with_empty_override.tree.style_text(a.element),
        without_user.tree.style_text(b.element)
    );
}

#[test]
fn test_falsy_override_is_ignored() {
    let defaults = vec![ConfigNode {
        content: Some(ContentSpec::Text("Default".to_string())),
        ..tagged("btn", "button")
    }];
    let users = vec![ConfigNode {
        element: Some(ElementSpec::Tag(String::new())),
        content: Some(ContentSpec::Text(String::new())),
        ..ConfigNode::new("btn")
    }];

    let component = build_component(defaults, Some(users), None, Vec::new());
    let node = &component.final_config[0];
    assert_eq!(component.tree.get(node.element).unwrap().tag_name, "button");
    assert_eq!(component.tree.text(node.element), Some("Default"));
}

#[test]
fn test_tree_shape_follows_defaults_not_user() {
    let defaults = vec![ConfigNode {
        children: vec![tagged("a", "span"), tagged("b", "span")],
        ..tagged("root", "div")
    }];
    // The user tree names a node that does not exist and omits "b";
    // neither changes the output shape.
    let users = vec![ConfigNode {
        children: vec![
            ConfigNode {
                content: Some(ContentSpec::Text("A".to_string())),
                ..ConfigNode::new("a")
            },
            ConfigNode::new("ghost"),
        ],
        ..ConfigNode::new("root")
    }];

    let component = build_component(defaults, Some(users), None, Vec::new());
    assert_eq!(component.final_config.len(), 1);
    let root = &component.final_config[0];
    assert_eq!(root.children.len(), 2);
    assert_eq!(root.children[0].name, "a");
    assert_eq!(root.children[1].name, "b");
    assert_eq!(
        component.tree.text(root.children[0].element),
        Some("A")
    );
}

#[test]
fn test_user_node_without_children_defaults_whole_subtree() {
    let defaults = vec![ConfigNode {
        children: vec![ConfigNode {
            content: Some(ContentSpec::Text("inner".to_string())),
            ..tagged("leaf", "em")
        }],
        ..tagged("root", "div")
    }];
    // User overrides the root style but carries no child list.
    let users = vec![ConfigNode {
        style: Some(StyleSpec::Text("color: blue".to_string())),
        ..ConfigNode::new("root")
    }];

    let component = build_component(defaults, Some(users), None, Vec::new());
    let root = &component.final_config[0];
    assert_eq!(root.children.len(), 1);
    assert_eq!(
        component.tree.text(root.children[0].element),
        Some("inner")
    );
}

#[test]
fn test_duplicate_user_names_first_match_wins() {
    let defaults = vec![tagged("btn", "button")];
    let users = vec![
        ConfigNode {
            content: Some(ContentSpec::Text("first".to_string())),
            ..ConfigNode::new("btn")
        },
        ConfigNode {
            content: Some(ContentSpec::Text("second".to_string())),
            ..ConfigNode::new("btn")
        },
    ];

    let component = build_component(defaults, Some(users), None, Vec::new());
    let node = &component.final_config[0];
    assert_eq!(component.tree.text(node.element), Some("first"));
}

// ========== styles ==========

#[test]
fn test_style_mapping_lands_in_style_text() {
    let defaults = vec![ConfigNode {
        style: Some(StyleSpec::Declarations(vec![
            trellis_component::StyleDeclaration::new("color", "red"),
        ])),
        ..tagged("box", "div")
    }];
    let component = build_component(defaults, None, None, Vec::new());

    let node = &component.final_config[0];
    let text = node.style_text(&component.tree);
    assert!(text.contains("color : red;"), "got {text:?}");
}

#[test]
fn test_user_style_appends_after_default_style() {
    let defaults = vec![ConfigNode {
        style: Some(StyleSpec::Text("color: red".to_string())),
        ..tagged("box", "div")
    }];
    let users = vec![ConfigNode {
        style: Some(StyleSpec::Text("color: blue".to_string())),
        ..ConfigNode::new("box")
    }];

    let component = build_component(defaults, Some(users), None, Vec::new());
    let node = &component.final_config[0];
    let text = node.style_text(&component.tree).to_string();

    let red = text.find("color : red;").expect("default style present");
    let blue = text.find("color : blue;").expect("user style present");
    assert!(red < blue, "override must append after default: {text:?}");
}

#[test]
fn test_style_provider_with_empty_result_applies_nothing() {
    let defaults = vec![ConfigNode {
        style: Some(StyleSpec::Provider(Rc::new(Vec::new))),
        ..tagged("box", "div")
    }];
    let component = build_component(defaults, None, None, Vec::new());

    let node = &component.final_config[0];
    assert_eq!(node.style_text(&component.tree), "");
}

// ========== callbacks and dispatch ==========

#[test]
fn test_named_event_listener_fires_natively() {
    let hits = Rc::new(Cell::new(0u32));
    let counter = Rc::clone(&hits);

    let defaults = vec![ConfigNode {
        event_listener: Some(EventListenerSpec {
            event: Some("change".to_string()),
            callback: Some(Rc::new(move |_event| counter.set(counter.get() + 1))),
        }),
        ..tagged("field", "input")
    }];

    let mut component = build_component(defaults, None, None, Vec::new());
    let element = component.final_config[0].element;

    component.dispatch(element, &Event::new("change"));
    assert_eq!(hits.get(), 1);

    // Other event names do not reach the listener.
    component.dispatch(element, &Event::new("click"));
    assert_eq!(hits.get(), 1);
}

#[test]
fn test_listener_without_event_name_is_not_bound() {
    let hits = Rc::new(Cell::new(0u32));
    let counter = Rc::clone(&hits);

    let defaults = vec![ConfigNode {
        event_listener: Some(EventListenerSpec {
            event: None,
            callback: Some(Rc::new(move |_event| counter.set(counter.get() + 1))),
        }),
        ..tagged("field", "input")
    }];

    let mut component = build_component(defaults, None, None, Vec::new());
    let element = component.final_config[0].element;
    component.dispatch(element, &Event::new("change"));
    assert_eq!(hits.get(), 0);
}

#[test]
fn test_click_handler_receives_component_and_element() {
    let defaults = vec![ConfigNode {
        on_click: Some(Rc::new(|_event, component: &mut Component, element| {
            let count = component
                .state
                .get("clicks")
                .and_then(serde_json::Value::as_u64)
                .unwrap_or(0);
            let _ = component.state.insert("clicks".to_string(), json!(count + 1));
            component.tree.set_attribute(element, "data-clicked", "yes");
        })),
        ..tagged("btn", "button")
    }];

    let mut component = build_component(defaults, None, None, Vec::new());
    let element = component.final_config[0].element;

    component.dispatch(element, &Event::new("click"));
    component.dispatch(element, &Event::new("click"));

    assert_eq!(component.state.get("clicks"), Some(&json!(2)));
    assert_eq!(component.tree.attribute(element, "data-clicked"), Some("yes"));
}

#[test]
fn test_user_handler_overrides_default_handler() {
    let defaults = vec![ConfigNode {
        on_click: Some(Rc::new(|_event, component: &mut Component, _element| {
            let _ = component.state.insert("source".to_string(), json!("default"));
        })),
        ..tagged("btn", "button")
    }];
    let users = vec![ConfigNode {
        on_click: Some(Rc::new(|_event, component: &mut Component, _element| {
            let _ = component.state.insert("source".to_string(), json!("user"));
        })),
        ..ConfigNode::new("btn")
    }];

    let mut component = build_component(defaults, Some(users), None, Vec::new());
    let element = component.final_config[0].element;
    component.dispatch(element, &Event::new("click"));
    assert_eq!(component.state.get("source"), Some(&json!("user")));
}

#[test]
fn test_hover_handlers_brighten_then_restore_color() {
    let defaults = vec![ConfigNode {
        style: Some(StyleSpec::Text("color: red".to_string())),
        on_mouse_over: Some(Rc::new(default_on_mouse_over_color)),
        on_mouse_out: Some(Rc::new(default_on_mouse_out_color)),
        ..tagged("link", "a")
    }];

    let mut component = build_component(defaults, None, None, Vec::new());
    let element = component.final_config[0].element;

    component.dispatch(element, &Event::new("mouseover"));
    // red -> #ff0000, channels scaled by 84%: 255 * 0.84 = 214 = 0xd6
    let hovered = component.tree.style_text(element).unwrap().to_string();
    assert!(hovered.contains("color : #d60000;"), "got {hovered:?}");
    assert_eq!(component.tree.attribute(element, "data-color"), Some("red"));

    component.dispatch(element, &Event::new("mouseout"));
    let restored = component.tree.style_text(element).unwrap().to_string();
    assert!(restored.contains("color : red;"), "got {restored:?}");
    assert!(!restored.contains("#d60000"), "got {restored:?}");
}

#[test]
fn test_hover_handler_leaves_unresolvable_color_untouched() {
    let defaults = vec![ConfigNode {
        on_mouse_over: Some(Rc::new(default_on_mouse_over_color)),
        ..tagged("plain", "p")
    }];

    let mut component = build_component(defaults, None, None, Vec::new());
    let element = component.final_config[0].element;

    component.dispatch(element, &Event::new("mouseover"));
    assert_eq!(component.tree.style_text(element), Some(""));
}

// ========== extensions and seeding ==========

#[test]
fn test_extension_registered_and_invoked_by_name() {
    let defaults = vec![tagged("root", "div")];
    let extensions: Vec<(String, trellis_component::Handler)> = vec![(
        "mark".to_string(),
        Rc::new(|_event, component: &mut Component, element| {
            component.tree.set_attribute(element, "data-marked", "yes");
        }),
    )];

    let mut component = build_component(defaults, None, None, extensions);
    let element = component.final_config[0].element;

    component.call_extension("mark", &Event::new("custom"), element);
    assert_eq!(component.tree.attribute(element, "data-marked"), Some("yes"));

    // Unknown names are ignored.
    component.call_extension("missing", &Event::new("custom"), element);
}

#[test]
fn test_base_component_state_carries_over() {
    let mut base = Component::new();
    let _ = base.state.insert("theme".to_string(), json!("dark"));

    let component = build_component(vec![tagged("root", "div")], None, Some(base), Vec::new());
    assert_eq!(component.state.get("theme"), Some(&json!("dark")));
    assert_eq!(component.final_config.len(), 1);
}

// ========== lookup ==========

#[test]
fn test_find_element_scans_one_level_only() {
    let defaults = vec![ConfigNode {
        children: vec![tagged("inner", "span")],
        ..tagged("outer", "div")
    }];
    let component = build_component(defaults, None, None, Vec::new());

    assert!(find_element(&component.final_config, by_name("outer")).is_some());
    assert!(find_element(&component.final_config, by_name("inner")).is_none());
}

#[test]
fn test_find_child_element_reaches_third_level() {
    let defaults = vec![ConfigNode {
        children: vec![ConfigNode {
            children: vec![tagged("deep", "b")],
            ..tagged("middle", "div")
        }],
        ..tagged("top", "div")
    }];
    let component = build_component(defaults, None, None, Vec::new());

    let found = find_child_element(&component.final_config, by_name("deep"));
    assert_eq!(found.map(|node| node.name.as_str()), Some("deep"));

    assert!(find_child_element(&component.final_config, by_name("absent")).is_none());
}
