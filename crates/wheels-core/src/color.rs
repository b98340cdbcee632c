/// 8-bit RGBA colour as used by the palette tables.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    pub const WHITE: Rgba = Rgba::rgb(255, 255, 255);
    pub const BLACK: Rgba = Rgba::rgb(0, 0, 0);

    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::new(r, g, b, 255)
    }

    pub const fn with_alpha(self, a: u8) -> Self {
        Self { a, ..self }
    }

    /// CSS colour string, e.g. `rgba(37,84,125,1.000)`.
    pub fn to_css(self) -> String {
        format!(
            "rgba({},{},{},{:.3})",
            self.r,
            self.g,
            self.b,
            self.a as f32 / 255.0
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn css_alpha_is_normalised() {
        assert_eq!(Rgba::rgb(37, 84, 125).to_css(), "rgba(37,84,125,1.000)");
        assert_eq!(Rgba::new(255, 255, 255, 0).to_css(), "rgba(255,255,255,0.000)");
        assert_eq!(Rgba::BLACK.with_alpha(153).a, 153);
    }
}
