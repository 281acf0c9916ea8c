//! Built-in layouts for `sxl sample`.

use siloxane_core::{
    Button, ButtonStyle, Container, File, LayoutMessage, MediaGallery, MediaGalleryItem, Section,
    Separator, SeparatorSpacing, TextDisplay, Thumbnail, ValidationError,
};

use crate::error::SxlError;

pub const SAMPLE_NAMES: &[&str] = &["basic-layout", "media-and-files", "opt-in"];

const BLURPLE: i64 = 0x5865F2;

fn basic_layout() -> Result<LayoutMessage, ValidationError> {
    let header = Section::new(vec![TextDisplay::new("# Welcome to Components V2!")])?;
    let content = Section::new(vec![TextDisplay::new(
        "This is a demonstration of Discord's new message layout system.",
    )])?
    .with_accessory(
        Thumbnail::new("https://example.com/image.png").with_description("Example thumbnail"),
    );
    let button = Section::new(vec![TextDisplay::new("Try the button:")])?.with_accessory(
        Button::new(ButtonStyle::Primary, "demo_button")?.with_label("Click me!"),
    );

    let container = Container::new(vec![header.into(), content.into(), button.into()])?
        .with_accent_color(BLURPLE)?;
    LayoutMessage::new(vec![container.into()])
}

fn media_and_files() -> Result<LayoutMessage, ValidationError> {
    let gallery = MediaGallery::new(
        (1..=3)
            .map(|i| MediaGalleryItem::new(format!("https://example.com/image{i}.png")))
            .collect(),
    )?;

    let container = Container::new(vec![
        Section::new(vec![TextDisplay::new("# Media Gallery Example")])?.into(),
        Section::new(vec![TextDisplay::new("Here's a gallery of images:")])?.into(),
        gallery.into(),
        Separator::new().with_spacing(SeparatorSpacing::Large).into(),
        Section::new(vec![TextDisplay::new("Here's an attached document:")])?.into(),
        File::new("document.pdf").into(),
    ])?
    .with_accent_color(BLURPLE)?;
    LayoutMessage::new(vec![container.into()])
}

fn opt_in() -> Result<LayoutMessage, ValidationError> {
    let section = Section::new(vec![TextDisplay::new("This message uses Components V2!")])?;
    let container = Container::new(vec![section.into()])?;
    LayoutMessage::new(vec![container.into()])
}

pub fn sample(name: &str) -> Result<LayoutMessage, SxlError> {
    let message = match name {
        "basic-layout" => basic_layout()?,
        "media-and-files" => media_and_files()?,
        "opt-in" => opt_in()?,
        _ => return Err(SxlError::UnknownSample(name.to_string())),
    };
    Ok(message)
}
