//! Depth-first walks over a layout tree.

use crate::component::Component;
use crate::interactive::{ActionRow, Button};
use crate::layout::{
    Container, ContainerChild, File, MediaGallery, Section, SectionAccessory, Separator,
    TextDisplay, Thumbnail,
};

/// Receives every node of a tree, parents before children, siblings in order.
///
/// All hooks default to doing nothing, so implementors only override the
/// kinds they care about.
pub trait Visitor {
    fn visit_action_row(&mut self, _row: &ActionRow) {}
    fn visit_button(&mut self, _button: &Button) {}
    fn visit_section(&mut self, _section: &Section) {}
    fn visit_text_display(&mut self, _text: &TextDisplay) {}
    fn visit_thumbnail(&mut self, _thumbnail: &Thumbnail) {}
    fn visit_media_gallery(&mut self, _gallery: &MediaGallery) {}
    fn visit_file(&mut self, _file: &File) {}
    fn visit_separator(&mut self, _separator: &Separator) {}
    fn visit_container(&mut self, _container: &Container) {}
}

/// A node (or slot enum) that can walk itself and its children.
pub trait Visitable {
    fn accept(&self, visitor: &mut dyn Visitor);
}

impl Visitable for Button {
    fn accept(&self, visitor: &mut dyn Visitor) {
        visitor.visit_button(self);
    }
}

impl Visitable for ActionRow {
    fn accept(&self, visitor: &mut dyn Visitor) {
        visitor.visit_action_row(self);
        for button in self.components() {
            button.accept(visitor);
        }
    }
}

impl Visitable for TextDisplay {
    fn accept(&self, visitor: &mut dyn Visitor) {
        visitor.visit_text_display(self);
    }
}

impl Visitable for Thumbnail {
    fn accept(&self, visitor: &mut dyn Visitor) {
        visitor.visit_thumbnail(self);
    }
}

impl Visitable for MediaGallery {
    fn accept(&self, visitor: &mut dyn Visitor) {
        visitor.visit_media_gallery(self);
    }
}

impl Visitable for File {
    fn accept(&self, visitor: &mut dyn Visitor) {
        visitor.visit_file(self);
    }
}

impl Visitable for Separator {
    fn accept(&self, visitor: &mut dyn Visitor) {
        visitor.visit_separator(self);
    }
}

impl Visitable for SectionAccessory {
    fn accept(&self, visitor: &mut dyn Visitor) {
        match self {
            SectionAccessory::Button(button) => button.accept(visitor),
            SectionAccessory::Thumbnail(thumbnail) => thumbnail.accept(visitor),
        }
    }
}

impl Visitable for Section {
    fn accept(&self, visitor: &mut dyn Visitor) {
        visitor.visit_section(self);
        for text in self.components() {
            text.accept(visitor);
        }
        if let Some(accessory) = self.accessory() {
            accessory.accept(visitor);
        }
    }
}

impl Visitable for ContainerChild {
    fn accept(&self, visitor: &mut dyn Visitor) {
        match self {
            ContainerChild::ActionRow(row) => row.accept(visitor),
            ContainerChild::TextDisplay(text) => text.accept(visitor),
            ContainerChild::Section(section) => section.accept(visitor),
            ContainerChild::MediaGallery(gallery) => gallery.accept(visitor),
            ContainerChild::Separator(separator) => separator.accept(visitor),
            ContainerChild::File(file) => file.accept(visitor),
        }
    }
}

impl Visitable for Container {
    fn accept(&self, visitor: &mut dyn Visitor) {
        visitor.visit_container(self);
        for child in self.components() {
            child.accept(visitor);
        }
    }
}

impl Visitable for Component {
    fn accept(&self, visitor: &mut dyn Visitor) {
        match self {
            Component::ActionRow(node) => node.accept(visitor),
            Component::Button(node) => node.accept(visitor),
            Component::Section(node) => node.accept(visitor),
            Component::TextDisplay(node) => node.accept(visitor),
            Component::Thumbnail(node) => node.accept(visitor),
            Component::MediaGallery(node) => node.accept(visitor),
            Component::File(node) => node.accept(visitor),
            Component::Separator(node) => node.accept(visitor),
            Component::Container(node) => node.accept(visitor),
        }
    }
}
