//! Dynamic audio power management (DAPM) abstraction
//!
//! The DAPM engine powers audio widgets up and down as the paths through
//! them become active. Machine drivers describe their board-level widgets
//! and routes, toggle endpoint pins, and receive power events for widgets
//! that declared a handler.

/// Widget power event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DapmEvent {
    /// Before the widget is powered up
    PrePmu,
    /// After the widget is powered up
    PostPmu,
    /// Before the widget is powered down
    PrePmd,
    /// After the widget is powered down
    PostPmd,
}

impl DapmEvent {
    /// `true` for the power-up phases.
    #[must_use]
    pub const fn is_power_up(self) -> bool {
        matches!(self, Self::PrePmu | Self::PostPmu)
    }
}

/// Widget type
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum WidgetKind {
    /// Speaker output endpoint
    Speaker,
    /// Headphone output endpoint
    Headphone,
    /// Line output endpoint
    Line,
    /// Microphone input endpoint
    Mic,
}

/// Board-level DAPM widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Widget {
    /// Widget (and endpoint pin) name
    pub name: &'static str,
    /// Widget type
    pub kind: WidgetKind,
    /// Events delivered to the widget's handler. Empty means no handler.
    pub events: &'static [DapmEvent],
}

impl Widget {
    /// Speaker endpoint whose handler sees post-power-up and pre-power-down.
    #[must_use]
    pub const fn speaker(name: &'static str) -> Self {
        Self {
            name,
            kind: WidgetKind::Speaker,
            events: &[DapmEvent::PostPmu, DapmEvent::PrePmd],
        }
    }

    /// Returns `true` if `event` is delivered to this widget's handler.
    #[must_use]
    pub fn subscribes_to(&self, event: DapmEvent) -> bool {
        self.events.contains(&event)
    }
}

/// Audio path connection: `source` feeds `sink`, optionally through a
/// named mixer/mux control.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Route {
    /// Destination widget
    pub sink: &'static str,
    /// Switching control, if the path is switched
    pub control: Option<&'static str>,
    /// Source widget
    pub source: &'static str,
}

/// DAPM context of a codec or card.
pub trait DapmContext {
    /// Error type
    type Error: core::fmt::Debug;

    /// Mark an endpoint pin as connected. Takes effect on the next
    /// [`sync`](DapmContext::sync).
    fn enable_pin(&mut self, pin: &'static str);

    /// Mark an endpoint pin as disconnected. Takes effect on the next
    /// [`sync`](DapmContext::sync).
    fn disable_pin(&mut self, pin: &'static str);

    /// Re-evaluate all paths and apply pending pin changes.
    fn sync(&mut self);

    /// Register board-level widgets.
    fn new_widgets(&mut self, widgets: &'static [Widget]) -> Result<(), Self::Error>;

    /// Register routes between widgets.
    fn add_routes(&mut self, routes: &'static [Route]) -> Result<(), Self::Error>;
}

/// Receiver of widget power events.
pub trait WidgetEventHandler {
    /// Error type
    type Error: core::fmt::Debug;

    /// Called by the DAPM engine when `widget` passes through `event`.
    fn on_widget_event(&mut self, widget: &str, event: DapmEvent) -> Result<(), Self::Error>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_pmu_events_are_power_up() {
        assert!(DapmEvent::PrePmu.is_power_up());
        assert!(DapmEvent::PostPmu.is_power_up());
        assert!(!DapmEvent::PrePmd.is_power_up());
        assert!(!DapmEvent::PostPmd.is_power_up());
    }

    #[test]
    fn speaker_widget_subscribes_post_pmu_and_pre_pmd() {
        let w = Widget::speaker("Ext Spk");
        assert_eq!(w.kind, WidgetKind::Speaker);
        assert!(w.subscribes_to(DapmEvent::PostPmu));
        assert!(w.subscribes_to(DapmEvent::PrePmd));
        assert!(!w.subscribes_to(DapmEvent::PrePmu));
        assert!(!w.subscribes_to(DapmEvent::PostPmd));
    }
}
