//! The homepage carousel: one slide per statue kind, each rendered on a lit
//! stage with the statue active.

use super::{assemble, Color, StatueKind, StatueModel, Vec3};
use crate::model::Money;
use serde::Serialize;

/// Uniform scale of showcase models.
pub const SHOWCASE_SCALE: f64 = 1.2;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Camera {
    pub position: Vec3,
    pub fov: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Light {
    Ambient { intensity: f64 },
    Directional { position: Vec3, intensity: f64 },
    Point { position: Vec3, intensity: f64 },
}

/// Camera and lighting for a scene.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Stage {
    pub camera: Camera,
    pub lights: Vec<Light>,
}

impl Stage {
    pub fn showcase() -> Self {
        Self {
            camera: Camera {
                position: Vec3(0.0, 2.0, 8.0),
                fov: 50.0,
            },
            lights: vec![
                Light::Ambient { intensity: 0.6 },
                Light::Directional {
                    position: Vec3(10.0, 10.0, 5.0),
                    intensity: 1.2,
                },
                Light::Point {
                    position: Vec3(-10.0, -10.0, -10.0),
                    intensity: 0.8,
                },
            ],
        }
    }

    /// The closer, softer setup of the product detail viewer.
    pub fn detail() -> Self {
        Self {
            camera: Camera {
                position: Vec3(0.0, 2.0, 5.0),
                fov: 50.0,
            },
            lights: vec![
                Light::Ambient { intensity: 0.4 },
                Light::Directional {
                    position: Vec3(10.0, 10.0, 5.0),
                    intensity: 1.0,
                },
            ],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Slide {
    pub name: String,
    pub price: Money,
    pub description: String,
    pub color: Color,
    pub kind: StatueKind,
}

impl Slide {
    fn new(name: &str, dollars: u64, description: &str, color: Color, kind: StatueKind) -> Self {
        Self {
            name: name.to_string(),
            price: Money::from_dollars(dollars),
            description: description.to_string(),
            color,
            kind,
        }
    }

    /// The slide's statue, active and labelled.
    pub fn model(&self) -> StatueModel {
        assemble(self.kind, self.color, SHOWCASE_SCALE)
            .activate(&self.name, &self.price.to_string())
    }
}

pub fn slides() -> Vec<Slide> {
    vec![
        Slide::new(
            "Majestic Horse",
            3499,
            "Bronze stallion in dynamic pose",
            Color::rgb(0x8B, 0x73, 0x55),
            StatueKind::Horse,
        ),
        Slide::new(
            "Regal Lion",
            4299,
            "Powerful lion with detailed mane",
            Color::rgb(0xCD, 0x85, 0x3F),
            StatueKind::Lion,
        ),
        Slide::new(
            "Elegant Woman",
            3899,
            "Classical feminine grace in marble",
            Color::rgb(0xF5, 0xF5, 0xDC),
            StatueKind::Woman,
        ),
    ]
}

/// Slide position in a carousel. Navigation wraps in both directions.
#[derive(Debug, Clone, PartialEq)]
pub struct Carousel {
    slides: Vec<Slide>,
    index: usize,
}

impl Carousel {
    pub fn new(slides: Vec<Slide>) -> Self {
        Self { slides, index: 0 }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn len(&self) -> usize {
        self.slides.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slides.is_empty()
    }

    pub fn current(&self) -> Option<&Slide> {
        self.slides.get(self.index)
    }

    /// Jumps to `index`, wrapping past the end.
    pub fn select(&self, index: usize) -> Carousel {
        Carousel {
            slides: self.slides.clone(),
            index: self.wrap(index as i64),
        }
    }

    pub fn next(&self) -> Carousel {
        self.select_offset(1)
    }

    pub fn prev(&self) -> Carousel {
        self.select_offset(-1)
    }

    fn select_offset(&self, delta: i64) -> Carousel {
        Carousel {
            slides: self.slides.clone(),
            index: self.wrap(self.index as i64 + delta),
        }
    }

    fn wrap(&self, index: i64) -> usize {
        match self.slides.len() {
            0 => 0,
            n => index.rem_euclid(n as i64) as usize,
        }
    }
}

impl Default for Carousel {
    fn default() -> Self {
        Self::new(slides())
    }
}

/// Everything needed to draw one carousel frame.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ShowcaseScene {
    pub index: usize,
    pub count: usize,
    pub frames: u32,
    pub slide: Slide,
    pub stage: Stage,
    pub model: StatueModel,
}

impl ShowcaseScene {
    /// Builds the current slide's scene after `frames` animation frames.
    pub fn render(carousel: &Carousel, frames: u32) -> Option<Self> {
        let slide = carousel.current()?;
        let mut model = slide.model();
        model.animate(frames);
        Some(Self {
            index: carousel.index(),
            count: carousel.len(),
            frames,
            slide: slide.clone(),
            stage: Stage::showcase(),
            model,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn carousel_wraps_both_ways() {
        let carousel = Carousel::default();
        assert_eq!(carousel.len(), 3);
        assert_eq!(carousel.prev().index(), 2);
        assert_eq!(carousel.next().next().next().index(), 0);
        assert_eq!(carousel.select(4).index(), 1);
        assert_eq!(carousel.select(4).current().unwrap().name, "Regal Lion");
    }

    #[test]
    fn navigation_does_not_touch_the_original() {
        let carousel = Carousel::default();
        let _ = carousel.next();
        assert_eq!(carousel.index(), 0);
    }

    #[test]
    fn empty_carousel_has_no_scene() {
        let carousel = Carousel::new(Vec::new());
        assert!(carousel.next().current().is_none());
        assert!(ShowcaseScene::render(&carousel, 10).is_none());
    }

    #[test]
    fn slides_render_active_labelled_models() {
        let scene = ShowcaseScene::render(&Carousel::default(), 0).unwrap();
        assert!(scene.model.active);
        assert_eq!(scene.model.kind, StatueKind::Horse);
        assert_eq!(scene.model.transform.scale, Vec3::splat(1.2));
        let label = scene.model.label.as_ref().unwrap();
        assert_eq!(label.title, "Majestic Horse");
        assert_eq!(label.price, "$3,499");
        assert_eq!(scene.stage.camera.position, Vec3(0.0, 2.0, 8.0));
        assert_eq!(scene.stage.lights.len(), 3);
    }
}
