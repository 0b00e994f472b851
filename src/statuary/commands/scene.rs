use crate::commands::{CmdMessage, CmdResult, Page};
use crate::error::Result;
use crate::scene::showcase::{Carousel, ShowcaseScene, Stage};
use crate::scene::{assemble, Color, StatueKind, StatueModel};
use serde::Serialize;

/// Color used by the viewer when none is given (the showcase bronze).
pub const DEFAULT_VIEWER_COLOR: Color = Color::rgb(0x8B, 0x73, 0x55);

#[derive(Debug, Clone, Serialize)]
pub struct ViewerPage {
    pub frames: u32,
    pub stage: Stage,
    pub model: StatueModel,
}

/// Renders carousel slide `slide` (wrapping) after `frames` frames.
pub fn showcase(slide: usize, frames: u32) -> Result<CmdResult> {
    let carousel = Carousel::default().select(slide);
    let mut result = CmdResult::default();
    match ShowcaseScene::render(&carousel, frames) {
        Some(scene) => Ok(result.with_page(Page::Showcase(scene))),
        None => {
            result.add_message(CmdMessage::warning("The showcase has no slides."));
            Ok(result)
        }
    }
}

/// Builds a single statue on the showcase stage.
pub fn viewer(kind: StatueKind, color: Color, scale: f64, frames: u32) -> Result<CmdResult> {
    let mut model = assemble(kind, color, scale);
    model.animate(frames);
    Ok(CmdResult::default().with_page(Page::Viewer(ViewerPage {
        frames,
        stage: Stage::showcase(),
        model,
    })))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn showcase_slide_wraps() {
        match showcase(5, 0).unwrap().page {
            Some(Page::Showcase(scene)) => {
                assert_eq!(scene.index, 2);
                assert_eq!(scene.slide.name, "Elegant Woman");
            }
            other => panic!("unexpected page {:?}", other),
        }
    }

    #[test]
    fn viewer_animates_the_requested_frames() {
        match viewer(StatueKind::Lion, DEFAULT_VIEWER_COLOR, 2.0, 10).unwrap().page {
            Some(Page::Viewer(page)) => {
                assert_eq!(page.model.kind, StatueKind::Lion);
                assert!((page.model.transform.rotation.1 - 0.05).abs() < 1e-9);
                assert!(!page.model.active);
            }
            other => panic!("unexpected page {:?}", other),
        }
    }
}
