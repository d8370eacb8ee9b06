#![forbid(unsafe_code)]

//! Color configuration and gradient overlay math.
//!
//! Colors are explicit configuration passed at construction: the defaults
//! are a value, not module state, and caller overrides merge over them
//! with [`PickerColorOverrides::resolve`]. [`Rgba`] carries the color
//! values plus the string parsing and opacity math the host needs to
//! build its fade-out gradient overlay.

/// Default pixel height of one wheel row.
pub const ITEM_HEIGHT: f32 = 50.0;

/// An 8-bit RGB color with a fractional alpha.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(
    feature = "state-persistence",
    derive(serde::Serialize, serde::Deserialize)
)]
pub struct Rgba {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
    /// Alpha in `[0.0, 1.0]`.
    pub a: f32,
}

impl Rgba {
    /// Opaque black, the fallback for unparseable input.
    pub const BLACK: Self = Self::rgb(0, 0, 0);
    /// Opaque white.
    pub const WHITE: Self = Self::rgb(255, 255, 255);

    /// An opaque color from its channels.
    #[must_use]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    /// A color from channels and alpha.
    #[must_use]
    pub const fn rgba(r: u8, g: u8, b: u8, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Parse a `#RGB`/`#RRGGBB` hex color or an `rgb(...)`/`rgba(...)`
    /// string. Anything unparseable falls back to opaque black.
    #[must_use]
    pub fn parse(input: &str) -> Self {
        if let Some(hex) = input.strip_prefix('#') {
            return Self::parse_hex(hex).unwrap_or(Self::BLACK);
        }
        Self::parse_channels(input).unwrap_or(Self::BLACK)
    }

    fn parse_hex(hex: &str) -> Option<Self> {
        if !hex.is_ascii() {
            return None;
        }
        match hex.len() {
            3 => {
                let digit = |i: usize| u8::from_str_radix(&hex[i..=i], 16).ok();
                let (r, g, b) = (digit(0)?, digit(1)?, digit(2)?);
                // Each nibble doubles: "f" becomes 0xff.
                Some(Self::rgb(r * 17, g * 17, b * 17))
            }
            6 => {
                let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();
                Some(Self::rgb(channel(0)?, channel(2)?, channel(4)?))
            }
            _ => None,
        }
    }

    fn parse_channels(input: &str) -> Option<Self> {
        let mut runs = input
            .split(|c: char| !c.is_ascii_digit())
            .filter(|run| !run.is_empty());
        let r = runs.next()?.parse().ok()?;
        let g = runs.next()?.parse().ok()?;
        let b = runs.next()?.parse().ok()?;
        Some(Self::rgb(r, g, b))
    }

    /// The same color with a different alpha.
    #[must_use]
    pub fn with_opacity(self, opacity: f32) -> Self {
        Self { a: opacity, ..self }
    }

    /// Render as a CSS-style `rgba(r, g, b, a)` string.
    #[must_use]
    pub fn to_rgba_string(&self) -> String {
        format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
    }
}

/// The full color slot set for a picker.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(
    feature = "state-persistence",
    derive(serde::Serialize, serde::Deserialize)
)]
pub struct PickerColors {
    /// Main accent (selected item, buttons).
    pub primary: Rgba,
    /// Text color for picker items.
    pub text: Rgba,
    /// Color for the selected (middle) item.
    pub selected_text: Rgba,
    /// Color for unselected items.
    pub unselected_text: Rgba,
    /// Picker background.
    pub background: Rgba,
    /// Modal background.
    pub modal_background: Rgba,
    /// Button background.
    pub button_background: Rgba,
    /// Button text color.
    pub button_text: Rgba,
}

impl Default for PickerColors {
    /// iOS-inspired defaults.
    fn default() -> Self {
        let primary = Rgba::rgb(0, 122, 255);
        Self {
            primary,
            text: Rgba::BLACK,
            selected_text: Rgba::BLACK,
            unselected_text: Rgba::rgb(153, 153, 153),
            background: Rgba::WHITE,
            modal_background: Rgba::WHITE,
            button_background: primary,
            button_text: Rgba::WHITE,
        }
    }
}

/// Caller overrides for [`PickerColors`]; every slot is optional.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
#[cfg_attr(
    feature = "state-persistence",
    derive(serde::Serialize, serde::Deserialize)
)]
pub struct PickerColorOverrides {
    /// Override for the main accent.
    pub primary: Option<Rgba>,
    /// Override for the item text color.
    pub text: Option<Rgba>,
    /// Override for the selected item color.
    pub selected_text: Option<Rgba>,
    /// Override for the unselected item color.
    pub unselected_text: Option<Rgba>,
    /// Override for the picker background.
    pub background: Option<Rgba>,
    /// Override for the modal background.
    pub modal_background: Option<Rgba>,
    /// Override for the button background.
    pub button_background: Option<Rgba>,
    /// Override for the button text color.
    pub button_text: Option<Rgba>,
}

impl PickerColorOverrides {
    /// Merge these overrides over the defaults.
    #[must_use]
    pub fn resolve(self) -> PickerColors {
        let defaults = PickerColors::default();
        PickerColors {
            primary: self.primary.unwrap_or(defaults.primary),
            text: self.text.unwrap_or(defaults.text),
            selected_text: self.selected_text.unwrap_or(defaults.selected_text),
            unselected_text: self.unselected_text.unwrap_or(defaults.unselected_text),
            background: self.background.unwrap_or(defaults.background),
            modal_background: self.modal_background.unwrap_or(defaults.modal_background),
            button_background: self
                .button_background
                .unwrap_or(defaults.button_background),
            button_text: self.button_text.unwrap_or(defaults.button_text),
        }
    }
}

/// Gradient stop locations for the host's fade overlay.
///
/// The fade covers exactly the pad rows: one visible row out of
/// `2 * pad + 1` on each end, or a fixed 30% band when there are no pads.
#[must_use]
pub fn gradient_locations(pad_with_n_items: usize) -> [f32; 4] {
    let edge = if pad_with_n_items > 0 {
        1.0 / (2 * pad_with_n_items + 1) as f32
    } else {
        0.3
    };
    [0.0, edge, 1.0 - edge, 1.0]
}

/// Gradient stop colors for the host's fade overlay: opaque background at
/// the ends, fully transparent in the middle band.
#[must_use]
pub fn gradient_colors(background: Rgba) -> [Rgba; 4] {
    let transparent = background.with_opacity(0.0);
    [background, transparent, transparent, background]
}
