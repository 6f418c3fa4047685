//! The widget collection

pub mod button;
pub mod dial;
pub mod search_field;
pub mod slider;
pub mod tabs;
pub mod toggle;

pub use button::{Button, ButtonBuilder, ButtonSize, ButtonVariant};
pub use dial::{Dial, DialBuilder, DialState, TickMark};
pub use search_field::{FieldSurface, SearchField, SearchFieldBuilder};
pub use slider::{Slider, SliderBuilder};
pub use tabs::{Tab, TabBar, TabBarBuilder};
pub use toggle::{Toggle, ToggleBuilder, ToggleSize};
