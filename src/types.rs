use glam::Vec2;

/// RGBA color in linear [0, 1] components.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const BLACK: Color = Color::rgb(0.0, 0.0, 0.0);
    pub const GREEN: Color = Color::rgb(0.0, 1.0, 0.0);
    pub const MAGENTA: Color = Color::rgb(1.0, 0.0, 1.0);
    pub const YELLOW: Color = Color::rgb(1.0, 1.0, 0.0);

    /// Sky blue used by the spinning landmark cube.
    pub const BLUE: Color = Color::rgb(15.0 / 255.0, 171.0 / 255.0, 1.0);
    /// Default scenery color.
    pub const BROWN: Color = Color::rgb(110.0 / 255.0, 78.0 / 255.0, 33.0 / 255.0);
    /// Floor grid color.
    pub const GRID_GREEN: Color = Color::rgb(0.0, 0.5, 0.0);

    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    /// Same color with the alpha component replaced.
    pub const fn with_alpha(self, a: f32) -> Self {
        Self {
            r: self.r,
            g: self.g,
            b: self.b,
            a,
        }
    }

    /// Linear blend toward `other` by `fraction` (0 keeps self, 1 is other).
    pub fn blended(self, fraction: f32, other: Color) -> Color {
        let t = fraction.clamp(0.0, 1.0);
        Color {
            r: self.r + (other.r - self.r) * t,
            g: self.g + (other.g - self.g) * t,
            b: self.b + (other.b - self.b) * t,
            a: self.a + (other.a - self.a) * t,
        }
    }

    pub const fn to_array(self) -> [f32; 4] {
        [self.r, self.g, self.b, self.a]
    }
}

/// Screen-space vertex consumed by the GPU backend.
#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct ScreenVertex {
    pub position: [f32; 2],
    pub color: [f32; 4],
}

impl ScreenVertex {
    pub fn new(position: Vec2, color: Color) -> Self {
        Self {
            position: position.to_array(),
            color: color.to_array(),
        }
    }
}

/// Viewport uniform buffer data for the GPU backend.
#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct ViewportUniform {
    pub scale: [f32; 2],
    pub _pad: [f32; 2],
}

impl ViewportUniform {
    /// Maps the logical view square (0..view_size on both axes, y up) to
    /// normalized device coordinates.
    pub fn new(view_size: f32) -> Self {
        Self {
            scale: [2.0 / view_size, 2.0 / view_size],
            _pad: [0.0, 0.0],
        }
    }
}
