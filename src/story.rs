//! Story assembly: the ordered flowable sequence for one document.

use crate::image::{ImageOutcome, scaled_image};
use folio_flow::Flowable;
use folio_style::{StyleError, StyleSheet};
use log::warn;
use std::path::PathBuf;

/// Vertical gaps inserted after the title and body paragraphs, in points.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Spacing {
    pub after_title: f32,
    pub after_body: f32,
}

impl Default for Spacing {
    fn default() -> Self {
        Self { after_title: 12.0, after_body: 24.0 }
    }
}

/// An image to place in the story, subject to the height cap.
#[derive(Debug, Clone, PartialEq)]
pub struct ImageRequest {
    pub path: PathBuf,
    pub max_height: f32,
    pub upscale: bool,
}

impl ImageRequest {
    pub fn new(path: impl Into<PathBuf>, max_height: f32) -> Self {
        Self { path: path.into(), max_height, upscale: false }
    }
}

/// Inputs for [`build_story`].
#[derive(Debug, Clone)]
pub struct StoryRequest {
    /// Title paragraph text (may be empty).
    pub title: String,
    /// Body paragraph text (may be empty).
    pub body: String,
    /// Optional image; skipped with a warning if it cannot be produced.
    pub image: Option<ImageRequest>,
    pub spacing: Spacing,
    /// Flowables inserted before the title.
    pub prepend: Vec<Flowable>,
    /// Flowables appended at the end of the story.
    pub append: Vec<Flowable>,
    /// Group body and image in one block so a page break cannot orphan the
    /// image from its paragraph.
    pub keep_image_with_body: bool,
}

impl StoryRequest {
    pub fn new(title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            body: body.into(),
            image: None,
            spacing: Spacing::default(),
            prepend: Vec::new(),
            append: Vec::new(),
            keep_image_with_body: true,
        }
    }
}

/// Composes the story in order: prepended flowables, title and spacer,
/// body block (paragraph, spacer, optional image), appended flowables.
///
/// # Errors
///
/// Fails with [`StyleError::MissingStyle`] when `styles` lacks "Title" or
/// "BodyText". An unusable image is not an error; it is logged and
/// omitted, leaving the rest of the sequence unaffected.
pub fn build_story(styles: &StyleSheet, request: StoryRequest) -> Result<Vec<Flowable>, StyleError> {
    let title_style = styles.require("Title")?.clone();
    let body_style = styles.require("BodyText")?.clone();

    let mut story: Vec<Flowable> = Vec::new();
    story.extend(request.prepend);

    story.push(Flowable::paragraph(request.title, title_style));
    story.push(Flowable::spacer(request.spacing.after_title));

    let mut body_block = vec![
        Flowable::paragraph(request.body, body_style),
        Flowable::spacer(request.spacing.after_body),
    ];

    let mut image_block: Vec<Flowable> = Vec::new();
    if let Some(image) = &request.image {
        match scaled_image(&image.path, image.max_height, image.upscale) {
            ImageOutcome::Flowable(flowable) => image_block.push(flowable),
            ImageOutcome::Skipped(reason) => {
                warn!(
                    "Image skipped ({}): {}",
                    reason.as_str(),
                    image.path.display()
                );
            }
        }
    }

    if request.keep_image_with_body && !image_block.is_empty() {
        body_block.extend(image_block);
        story.push(Flowable::KeepTogether(body_block));
    } else {
        story.extend(body_block);
        story.extend(image_block);
    }

    story.extend(request.append);
    Ok(story)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn kinds(story: &[Flowable]) -> Vec<&'static str> {
        story.iter().map(Flowable::kind).collect()
    }

    #[test]
    fn test_default_story_order() {
        let styles = StyleSheet::builtin();
        let story = build_story(&styles, StoryRequest::new("T", "B")).unwrap();

        assert_eq!(kinds(&story), vec!["paragraph", "spacer", "paragraph", "spacer"]);
        match (&story[1], &story[3]) {
            (
                Flowable::Spacer { height: after_title, .. },
                Flowable::Spacer { height: after_body, .. },
            ) => {
                assert_eq!(*after_title, 12.0);
                assert_eq!(*after_body, 24.0);
            }
            other => panic!("expected spacers, got {:?}", other),
        }
    }

    #[test]
    fn test_title_and_body_use_their_styles() {
        let styles = StyleSheet::builtin();
        let story = build_story(&styles, StoryRequest::new("T", "B")).unwrap();

        match (&story[0], &story[2]) {
            (
                Flowable::Paragraph { text: title, style: title_style },
                Flowable::Paragraph { text: body, style: body_style },
            ) => {
                assert_eq!(title, "T");
                assert_eq!(title_style.name, "Title");
                assert_eq!(body, "B");
                assert_eq!(body_style.name, "BodyText");
            }
            other => panic!("expected paragraphs, got {:?}", other),
        }
    }

    #[test]
    fn test_spacing_overrides() {
        let styles = StyleSheet::builtin();
        let mut request = StoryRequest::new("T", "B");
        request.spacing = Spacing { after_title: 6.0, after_body: 48.0 };
        let story = build_story(&styles, request).unwrap();

        assert_eq!(story[1], Flowable::spacer(6.0));
        assert_eq!(story[3], Flowable::spacer(48.0));
    }

    #[test]
    fn test_missing_required_style_is_an_error() {
        let styles = StyleSheet::new();
        let err = build_story(&styles, StoryRequest::new("T", "B")).unwrap_err();
        assert_eq!(err, StyleError::MissingStyle("Title".to_string()));
    }

    #[test]
    fn test_image_grouped_with_body_by_default() {
        let dir = tempdir().unwrap();
        let img = dir.path().join("img.png");
        image::RgbaImage::new(10, 20).save(&img).unwrap();

        let mut request = StoryRequest::new("T", "B");
        request.image = Some(ImageRequest::new(&img, 10.0));
        let story = build_story(&StyleSheet::builtin(), request).unwrap();

        assert_eq!(kinds(&story), vec!["paragraph", "spacer", "keep-together"]);
        match &story[2] {
            Flowable::KeepTogether(block) => {
                assert_eq!(
                    block.iter().map(Flowable::kind).collect::<Vec<_>>(),
                    vec!["paragraph", "spacer", "image"]
                );
            }
            other => panic!("expected keep-together, got {:?}", other),
        }
    }

    #[test]
    fn test_image_appended_flat_when_grouping_disabled() {
        let dir = tempdir().unwrap();
        let img = dir.path().join("img.png");
        image::RgbaImage::new(10, 20).save(&img).unwrap();

        let mut request = StoryRequest::new("T", "B");
        request.image = Some(ImageRequest::new(&img, 10.0));
        request.keep_image_with_body = false;
        let story = build_story(&StyleSheet::builtin(), request).unwrap();

        assert_eq!(
            kinds(&story),
            vec!["paragraph", "spacer", "paragraph", "spacer", "image"]
        );
    }

    #[test]
    fn test_unresolvable_image_yields_same_story_as_none() {
        let dir = tempdir().unwrap();
        let styles = StyleSheet::builtin();

        let without_image = build_story(&styles, StoryRequest::new("T", "B")).unwrap();

        let mut request = StoryRequest::new("T", "B");
        request.image = Some(ImageRequest::new(dir.path().join("missing.png"), 100.0));
        let with_bad_image = build_story(&styles, request).unwrap();

        assert_eq!(with_bad_image, without_image);
    }

    #[test]
    fn test_prepend_and_append_are_kept_in_place() {
        let styles = StyleSheet::builtin();
        let mut request = StoryRequest::new("T", "B");
        request.prepend = vec![Flowable::spacer(100.0)];
        request.append = vec![Flowable::spacer(200.0)];
        let story = build_story(&styles, request).unwrap();

        assert_eq!(story.first(), Some(&Flowable::spacer(100.0)));
        assert_eq!(story.last(), Some(&Flowable::spacer(200.0)));
    }
}
