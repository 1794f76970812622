//! Ready-made hover handlers.
//!
//! Each mouseover handler caches the element's current value in a
//! `data-color` attribute, then brightens it through the component's color
//! capabilities; the matching mouseout handler restores the cached value.
//! A value that cannot be normalized to a hex color (including an element
//! with no value set) leaves the element untouched.

use trellis_dom::{ElementId, Event};

use crate::component::Component;
use crate::style::{set_style_property, style_property};

/// Brightness shift applied on hover, in percent.
const HOVER_BRIGHTNESS_PERCENT: i32 = 16;

/// Attribute caching the pre-hover value.
const CACHE_ATTRIBUTE: &str = "data-color";

/// Brighten the element's text color on mouseover, caching the prior value.
pub fn default_on_mouse_over_color(_event: &Event, component: &mut Component, element: ElementId) {
    cache_and_brighten(component, element, "color");
}

/// Restore the element's text color cached by the mouseover handler.
pub fn default_on_mouse_out_color(_event: &Event, component: &mut Component, element: ElementId) {
    restore_cached(component, element, "color");
}

/// Brighten the element's background on mouseover, caching the prior value.
pub fn default_on_mouse_over_background(
    _event: &Event,
    component: &mut Component,
    element: ElementId,
) {
    cache_and_brighten(component, element, "background");
}

/// Restore the element's background cached by the mouseover handler.
pub fn default_on_mouse_out_background(
    _event: &Event,
    component: &mut Component,
    element: ElementId,
) {
    restore_cached(component, element, "background");
}

fn cache_and_brighten(component: &mut Component, element: ElementId, property: &str) {
    let current = component
        .tree
        .style_text(element)
        .and_then(|text| style_property(text, property))
        .unwrap_or_default();
    component
        .tree
        .set_attribute(element, CACHE_ATTRIBUTE, &current);

    let Some(hex) = (component.helpers.rgb_code)(&current) else {
        return;
    };
    let Some(shifted) = (component.helpers.adjust_brightness)(&hex, HOVER_BRIGHTNESS_PERCENT)
    else {
        return;
    };
    set_style_property(&mut component.tree, element, property, &shifted);
}

fn restore_cached(component: &mut Component, element: ElementId, property: &str) {
    let Some(cached) = component
        .tree
        .attribute(element, CACHE_ATTRIBUTE)
        .map(str::to_string)
    else {
        return;
    };
    set_style_property(&mut component.tree, element, property, &cached);
}
