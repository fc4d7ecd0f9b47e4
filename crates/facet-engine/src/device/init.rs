/// Surface and device options applied when the window's GPU context is built.
///
/// The defaults suit a static scene: a linear surface, vsync pacing, and
/// whatever alpha mode the surface lists first.
#[derive(Debug, Clone)]
pub struct GpuInit {
    /// Pick an sRGB surface format if one is offered.
    ///
    /// Off by default, so vertex colors are written to the framebuffer as-is.
    pub prefer_srgb: bool,

    pub present_mode: wgpu::PresentMode,

    /// Alpha compositing wanted for the surface; ignored when unsupported.
    pub alpha_mode: Option<wgpu::CompositeAlphaMode>,

    /// Frames the surface may queue ahead of the display.
    pub desired_maximum_frame_latency: u32,
}

impl Default for GpuInit {
    fn default() -> Self {
        Self {
            prefer_srgb: false,
            present_mode: wgpu::PresentMode::Fifo,
            alpha_mode: None,
            desired_maximum_frame_latency: 2,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_surface_is_linear_and_vsynced() {
        let init = GpuInit::default();
        assert!(!init.prefer_srgb);
        assert_eq!(init.present_mode, wgpu::PresentMode::Fifo);
        assert_eq!(init.alpha_mode, None);
    }
}
