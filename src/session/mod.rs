//! The edit session: one open image, its shapes, and the pointer gesture in
//! progress.
//!
//! A gesture is press → move* → release with the left button. What a press
//! starts depends on where it lands:
//!
//! - on a handle of the selected shape (within the grab tolerance): resize,
//! - inside the selected shape: move,
//! - anywhere else: draw a new rectangle.
//!
//! Handles are tested before the body, so a press exactly on a corner
//! resizes. A release without movement while drawing is a click: the
//! placeholder is dropped and the shape under the pointer is selected.
//!
//! Key actions apply to the selected shape and are ignored mid-gesture.

mod transform;


use std::path::Path;

use boxtext_geom::{Point, Rect};

pub use transform::ViewTransform;

use crate::config::{EditingConfig, EditorConfig, RenderConfig};
use crate::error::{Error, Result};
use crate::format;
use crate::hit_test::hit_test;
use crate::input::{InputEvent, KeyCode, MouseButton};
use crate::keybindings::{EditAction, KeyBindings};
use crate::model::{Handle, Shape, ShapeCollection};
use crate::prompt::TextPrompt;
use crate::render::{RenderShape, render_list};
use crate::store::MetadataStore;
use crate::surface::{ImageInfo, Size};

/// What the current gesture is doing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EditMode {
    /// No gesture in progress
    #[default]
    Idle,
    /// Dragging out a new rectangle (the last shape in the collection)
    Drawing,
    /// Dragging the selected shape
    Moving,
    /// Dragging one handle of the selected shape
    Resizing(Handle),
}

/// Points of the gesture in progress, in image coordinates.
#[derive(Debug, Clone, Copy)]
struct Gesture {
    /// Where the press happened
    origin: Point,
    /// Last position a move was applied from
    anchor: Point,
}

/// Editing state for one image.
#[derive(Debug, Clone)]
pub struct EditSession {
    shapes: ShapeCollection,
    image: Option<ImageInfo>,
    viewport: Option<Size>,
    editing: EditingConfig,
    keybindings: KeyBindings,
    colors: RenderConfig,
    mode: EditMode,
    gesture: Option<Gesture>,
    pointer: Option<Point>,
}

impl EditSession {
    pub fn new(config: &EditorConfig) -> Self {
        Self {
            shapes: ShapeCollection::new(),
            image: None,
            viewport: None,
            editing: config.editing.clone(),
            keybindings: config.keybindings.clone(),
            colors: config.render.clone(),
            mode: EditMode::Idle,
            gesture: None,
            pointer: None,
        }
    }

    // ---- image lifecycle ----

    /// Open an image and load its stored annotations.
    ///
    /// Fails only if the image cannot be read. Annotations that cannot be
    /// loaded are logged and the session starts with no shapes.
    pub fn open_image(&mut self, path: &Path, store: &dyn MetadataStore) -> Result<()> {
        let info = ImageInfo::probe(path)?;

        let bytes = match store.load(path) {
            Ok(bytes) => bytes,
            Err(e) => {
                log::warn!("Could not read metadata of {:?}: {}", path, e);
                None
            }
        };

        self.open_with(info, bytes.as_deref());
        Ok(())
    }

    /// Replace the session contents with an already probed image and its
    /// raw annotation bytes.
    pub fn open_with(&mut self, info: ImageInfo, annotations: Option<&[u8]>) {
        self.shapes = format::decode(annotations);
        self.mode = EditMode::Idle;
        self.gesture = None;
        self.pointer = None;
        log::info!(
            "Opened {:?} ({}) with {} shapes",
            info.path,
            info.size,
            self.shapes.len()
        );
        self.image = Some(info);
    }

    /// Write the annotations to the metadata of `path`.
    ///
    /// `path` does not have to be the opened image.
    pub fn save_as(&self, path: &Path, store: &mut dyn MetadataStore) -> Result<()> {
        let bytes = self.shapes.encode()?;
        store.save(path, &bytes)?;
        log::info!("Saved {} shapes to {:?}", self.shapes.len(), path);
        Ok(())
    }

    /// Write the annotations back to the opened image.
    pub fn save(&self, store: &mut dyn MetadataStore) -> Result<()> {
        let path = &self.image.as_ref().ok_or(Error::NoImage)?.path;
        self.save_as(path, store)
    }

    /// Set the area available for displaying the image.
    ///
    /// The image is shown scaled to fit, keeping its aspect ratio.
    pub fn set_viewport(&mut self, viewport: Size) {
        log::debug!("Viewport set to {}", viewport);
        self.viewport = Some(viewport);
    }

    /// Mapping between window and image, once both sizes are known.
    pub fn transform(&self) -> Option<ViewTransform> {
        let image = self.image.as_ref()?.size;
        let display = image.fit_within(self.viewport?);
        ViewTransform::new(image, display, self.editing.chrome_offset)
    }

    // ---- accessors ----

    pub fn shapes(&self) -> &ShapeCollection {
        &self.shapes
    }

    pub fn selected(&self) -> Option<usize> {
        self.shapes.selected()
    }

    pub fn mode(&self) -> EditMode {
        self.mode
    }

    pub fn image(&self) -> Option<&ImageInfo> {
        self.image.as_ref()
    }

    pub fn viewport(&self) -> Option<Size> {
        self.viewport
    }

    /// The rectangle being drawn, if a draw gesture is in progress.
    pub fn pending_shape(&self) -> Option<&Shape> {
        match self.mode {
            EditMode::Drawing => self.shapes.get(self.shapes.last_index()?),
            _ => None,
        }
    }

    /// Last known pointer position in image coordinates.
    pub fn pointer(&self) -> Option<Point> {
        self.pointer
    }

    /// What to draw, in window coordinates.
    pub fn render_list(&self) -> Vec<RenderShape> {
        match self.transform() {
            Some(transform) => render_list(&self.shapes, &transform, &self.colors),
            None => Vec::new(),
        }
    }

    // ---- events ----

    /// Dispatch one shell event.
    pub fn handle_event(&mut self, event: InputEvent, prompt: &mut dyn TextPrompt) {
        match event {
            InputEvent::PointerDown { position, button } => self.pointer_down(position, button),
            InputEvent::PointerMove { position } => self.pointer_move(position),
            InputEvent::PointerUp { position, button } => self.pointer_up(position, button),
            InputEvent::KeyPress { key } => {
                self.key_press(key, prompt);
            }
        }
    }

    /// Convert a window position, if an image is displayed.
    fn image_point(&self, position: Point) -> Option<(ViewTransform, Point)> {
        let transform = self.transform()?;
        Some((transform, transform.to_image(position)))
    }

    pub fn pointer_down(&mut self, position: Point, button: MouseButton) {
        if button != MouseButton::Left {
            return;
        }
        let Some((transform, point)) = self.image_point(position) else {
            return;
        };
        self.pointer = Some(point);

        if self.gesture.is_some() || self.mode != EditMode::Idle {
            self.abandon_gesture();
        }

        self.mode = self.press_target(&transform, point);
        if self.mode == EditMode::Drawing {
            self.shapes.append(Shape::rectangle(Rect::new(point, point)));
        }
        self.gesture = Some(Gesture {
            origin: point,
            anchor: point,
        });
        log::debug!("Press at {} starts {:?}", point, self.mode);
    }

    /// The gesture a press at `point` starts.
    fn press_target(&self, transform: &ViewTransform, point: Point) -> EditMode {
        let Some(shape) = self.shapes.selected_shape() else {
            return EditMode::Drawing;
        };

        let (tx, ty) = transform.handle_tolerance(
            self.editing.handle_tolerance_px,
            self.editing.min_handle_tolerance,
        );
        let grabbed = shape
            .handles()
            .into_iter()
            .find(|&(_, position)| Rect::around(position, tx, ty).contains(point));

        match grabbed {
            Some((handle, _)) => EditMode::Resizing(handle),
            None if shape.contains(point) => EditMode::Moving,
            None => EditMode::Drawing,
        }
    }

    /// Drop a gesture whose release never arrived.
    fn abandon_gesture(&mut self) {
        if self.mode == EditMode::Drawing {
            log::warn!("Discarding unfinished rectangle from an interrupted gesture");
            self.shapes.pop();
        } else {
            log::debug!("Abandoning stale {:?} gesture", self.mode);
        }
        self.mode = EditMode::Idle;
        self.gesture = None;
    }

    pub fn pointer_move(&mut self, position: Point) {
        let Some((_, point)) = self.image_point(position) else {
            return;
        };
        self.pointer = Some(point);

        let Some(gesture) = self.gesture.as_mut() else {
            log::trace!("Pointer at {}", point);
            return;
        };

        match self.mode {
            EditMode::Idle => {}
            EditMode::Drawing => {
                if let Some(last) = self.shapes.last_index() {
                    self.shapes
                        .replace_at(last, Shape::rectangle(Rect::new(gesture.origin, point)));
                }
            }
            EditMode::Moving => {
                let offset = point - gesture.anchor;
                if let Some(shape) = self.shapes.selected_shape_mut() {
                    shape.translate(offset);
                }
                gesture.anchor = point;
            }
            EditMode::Resizing(handle) => {
                if let Some(shape) = self.shapes.selected_shape_mut() {
                    shape.move_handle(handle, point);
                }
            }
        }
        log::trace!("{:?} to {}", self.mode, point);
    }

    pub fn pointer_up(&mut self, position: Point, button: MouseButton) {
        if button != MouseButton::Left {
            return;
        }
        let Some((_, point)) = self.image_point(position) else {
            return;
        };
        self.pointer = Some(point);

        let mode = std::mem::take(&mut self.mode);
        let Some(gesture) = self.gesture.take() else {
            return;
        };

        match mode {
            EditMode::Drawing => self.finish_drawing(gesture.origin, point),
            EditMode::Moving | EditMode::Resizing(_) => {
                log::debug!("Finished {:?} of shape {:?}", mode, self.shapes.selected());
            }
            EditMode::Idle => {}
        }
    }

    fn finish_drawing(&mut self, origin: Point, release: Point) {
        if (release - origin).manhattan_length() < 1 {
            // A click, not a drag
            self.shapes.pop();
            let hit = hit_test(&self.shapes, release);
            if self.shapes.select(hit) {
                log::info!("Selected shape {:?}", hit);
            }
            return;
        }

        if let Some(last) = self.shapes.last_index() {
            self.shapes
                .replace_at(last, Shape::rectangle(Rect::new(origin, release)));
            self.shapes.select(Some(last));
            log::info!("Created rectangle {} at index {}", Rect::new(origin, release), last);
        }
    }

    /// Apply the action bound to `key` to the selected shape.
    ///
    /// Returns true if the shapes changed. Keys are ignored during a gesture,
    /// without an image, or without a selection.
    pub fn key_press(&mut self, key: KeyCode, prompt: &mut dyn TextPrompt) -> bool {
        if self.mode != EditMode::Idle || self.image.is_none() {
            return false;
        }
        let Some(index) = self.shapes.selected() else {
            return false;
        };
        let Some(action) = self.keybindings.action_for_key(key) else {
            return false;
        };

        match action {
            EditAction::Delete => {
                let removed = self.shapes.remove_at(index);
                log::info!(
                    "Deleted shape {}, selection now {:?}",
                    index,
                    self.shapes.selected()
                );
                removed.is_some()
            }
            EditAction::EditLabel => self.edit_label(index, prompt),
            EditAction::Convert => {
                let Some(converted) = self.shapes.get(index).map(Shape::converted) else {
                    return false;
                };
                log::info!("Converted shape {} to {}", index, converted.kind_name());
                self.shapes.replace_at(index, converted).is_some()
            }
            EditAction::AppendVertex => {
                let Some(point) = self.pointer else {
                    return false;
                };
                match self.shapes.selected_shape_mut().and_then(Shape::as_polygon_mut) {
                    Some(polygon) => {
                        polygon.push(point);
                        log::debug!("Appended vertex {} to shape {}", point, index);
                        true
                    }
                    None => false,
                }
            }
        }
    }

    fn edit_label(&mut self, index: usize, prompt: &mut dyn TextPrompt) -> bool {
        let Some(shape) = self.shapes.get_mut(index) else {
            return false;
        };
        let current = shape.label().unwrap_or_default().to_string();

        match prompt.prompt_for_text(&current) {
            Some(text) => {
                shape.set_label(text);
                log::info!("Shape {} label set to {:?}", index, shape.label());
                true
            }
            None => {
                log::debug!("Label edit cancelled");
                false
            }
        }
    }
}

impl Default for EditSession {
    fn default() -> Self {
        Self::new(&EditorConfig::default())
    }
}
