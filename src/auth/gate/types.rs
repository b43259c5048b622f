//! Gate type definitions

/// State of a permission check as seen by a gate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GateState {
    /// Grants not resolved yet
    Loading,
    Allowed,
    Denied,
}

impl GateState {
    pub fn is_resolved(&self) -> bool {
        !matches!(self, Self::Loading)
    }
}

impl From<bool> for GateState {
    fn from(granted: bool) -> Self {
        if granted { Self::Allowed } else { Self::Denied }
    }
}

/// How a denied element is presented
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GateMode {
    /// Render nothing, or the fallback
    Hide,
    /// Render the element without its interactive handlers
    Disable,
    /// Like `Disable`, with an explanation attached
    ShowTooltip { message: String },
}

/// An element that can be shown in a non-interactive form
pub trait Gated: Sized {
    /// Strip interactive handlers and mark the element non-interactive
    fn disabled(self) -> Self;

    /// Attach an explanation shown alongside the element
    fn with_tooltip(self, message: &str) -> Self;
}

/// What a gate decided to render
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GateRender<T> {
    /// Neutral placeholder while grants are loading
    Placeholder,
    /// Nothing at all
    Nothing,
    /// The fallback supplied to a hiding gate
    Fallback(T),
    /// The child, possibly disabled
    Child(T),
}

impl<T> GateRender<T> {
    /// The rendered element, if any
    pub fn into_element(self) -> Option<T> {
        match self {
            Self::Fallback(element) | Self::Child(element) => Some(element),
            Self::Placeholder | Self::Nothing => None,
        }
    }
}

/// Presentation policy for one guarded element
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PermissionGate<T> {
    mode: GateMode,
    fallback: Option<T>,
}

impl<T: Gated> PermissionGate<T> {
    pub fn new(mode: GateMode) -> Self {
        Self {
            mode,
            fallback: None,
        }
    }

    pub fn hide() -> Self {
        Self::new(GateMode::Hide)
    }

    pub fn disable() -> Self {
        Self::new(GateMode::Disable)
    }

    pub fn tooltip(message: impl Into<String>) -> Self {
        Self::new(GateMode::ShowTooltip {
            message: message.into(),
        })
    }

    /// Element rendered by a hiding gate on denial
    pub fn with_fallback(mut self, fallback: T) -> Self {
        self.fallback = Some(fallback);
        self
    }

    pub fn mode(&self) -> &GateMode {
        &self.mode
    }

    /// Decide what to render for `child` in the given state
    pub fn render(self, state: GateState, child: T) -> GateRender<T> {
        match (state, self.mode) {
            (GateState::Loading, _) => GateRender::Placeholder,
            (GateState::Allowed, _) => GateRender::Child(child),
            (GateState::Denied, GateMode::Hide) => match self.fallback {
                Some(fallback) => GateRender::Fallback(fallback),
                None => GateRender::Nothing,
            },
            (GateState::Denied, GateMode::Disable) => GateRender::Child(child.disabled()),
            (GateState::Denied, GateMode::ShowTooltip { message }) => {
                GateRender::Child(child.disabled().with_tooltip(&message))
            }
        }
    }
}
