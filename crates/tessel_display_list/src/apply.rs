//! Applying items to a drawing surface
//!
//! Plain items implement [`ApplyItem`]. Items that reference a resource
//! implement only [`ApplyWithResource`], so a typed resource item cannot be
//! applied without the resource it needs. The type-erased [`Item`] reports
//! the same mistake as [`ApplyError::ResourceRequired`].

use tracing::error;

use crate::error::ApplyError;
use crate::items::{Item, ItemType};
use crate::resources::{FilterResults, ResourceHeap};
use crate::surface::DrawingSurface;

/// Item that can be applied with nothing but a surface
pub trait ApplyItem {
    fn apply(&self, surface: &mut dyn DrawingSurface);
}

/// Item that needs a resolved resource to be applied
pub trait ApplyWithResource {
    type Resource<'r>;

    fn apply_with(&self, surface: &mut dyn DrawingSurface, resource: Self::Resource<'_>);
}

impl Item {
    /// Apply a plain item
    ///
    /// Fails without touching the surface for items that reference a
    /// resource; use [`Item::apply_with_resources`] for those.
    pub fn apply(&self, surface: &mut dyn DrawingSurface) -> Result<(), ApplyError> {
        match self {
            Item::Save(item) => item.apply(surface),
            Item::Restore(item) => item.apply(surface),
            Item::Translate(item) => item.apply(surface),
            Item::Rotate(item) => item.apply(surface),
            Item::Scale(item) => item.apply(surface),
            Item::SetCTM(item) => item.apply(surface),
            Item::ConcatenateCTM(item) => item.apply(surface),
            Item::SetInlineFillColor(item) => item.apply(surface),
            Item::SetInlineStrokeColor(item) => item.apply(surface),
            Item::SetStrokeThickness(item) => item.apply(surface),
            Item::SetState(item) => item.apply(surface),
            Item::SetLineCap(item) => item.apply(surface),
            Item::SetLineDash(item) => item.apply(surface),
            Item::SetLineJoin(item) => item.apply(surface),
            Item::SetMiterLimit(item) => item.apply(surface),
            Item::ClearShadow(item) => item.apply(surface),
            Item::Clip(item) => item.apply(surface),
            Item::ClipOut(item) => item.apply(surface),
            Item::ClipOutToPath(item) => item.apply(surface),
            Item::ClipPath(item) => item.apply(surface),
            Item::DrawSystemImage(item) => item.apply(surface),
            Item::DrawRect(item) => item.apply(surface),
            Item::DrawLine(item) => item.apply(surface),
            Item::DrawLinesForText(item) => item.apply(surface),
            Item::DrawDotsForDocumentMarker(item) => item.apply(surface),
            Item::DrawEllipse(item) => item.apply(surface),
            Item::DrawPath(item) => item.apply(surface),
            Item::DrawFocusRingPath(item) => item.apply(surface),
            Item::DrawFocusRingRects(item) => item.apply(surface),
            Item::FillRect(item) => item.apply(surface),
            Item::FillRectWithColor(item) => item.apply(surface),
            Item::FillRectWithGradient(item) => item.apply(surface),
            Item::FillCompositedRect(item) => item.apply(surface),
            Item::FillRoundedRect(item) => item.apply(surface),
            Item::FillRectWithRoundedHole(item) => item.apply(surface),
            Item::FillLine(item) => item.apply(surface),
            Item::FillArc(item) => item.apply(surface),
            Item::FillQuadCurve(item) => item.apply(surface),
            Item::FillBezierCurve(item) => item.apply(surface),
            Item::FillPath(item) => item.apply(surface),
            Item::FillEllipse(item) => item.apply(surface),
            Item::StrokeRect(item) => item.apply(surface),
            Item::StrokeLine(item) => item.apply(surface),
            Item::StrokeArc(item) => item.apply(surface),
            Item::StrokeQuadCurve(item) => item.apply(surface),
            Item::StrokeBezierCurve(item) => item.apply(surface),
            Item::StrokePath(item) => item.apply(surface),
            Item::StrokeEllipse(item) => item.apply(surface),
            Item::ClearRect(item) => item.apply(surface),
            Item::BeginTransparencyLayer(item) => item.apply(surface),
            Item::EndTransparencyLayer(item) => item.apply(surface),
            Item::ApplyStrokePattern(item) => item.apply(surface),
            Item::ApplyFillPattern(item) => item.apply(surface),
            Item::ApplyDeviceScaleFactor(item) => item.apply(surface),
            Item::ClipToImageBuffer(_)
            | Item::DrawFilteredImageBuffer(_)
            | Item::DrawGlyphs(_)
            | Item::DrawImageBuffer(_)
            | Item::DrawNativeImage(_)
            | Item::DrawPattern(_)
            | Item::PaintFrameForMedia(_) => {
                let item_type = self.item_type();
                error!(item = %item_type, "item applied without its resource");
                return Err(ApplyError::ResourceRequired(item_type));
            }
        }
        Ok(())
    }

    /// Apply any item, resolving resource identifiers through `resources`
    ///
    /// Plain items ignore the heap. Returns whether a resource was resolved.
    pub fn apply_with_resources(
        &self,
        surface: &mut dyn DrawingSurface,
        resources: &ResourceHeap,
        filter_results: &mut FilterResults,
    ) -> Result<bool, ApplyError> {
        let missing = |item_type: ItemType, id| {
            error!(item = %item_type, %id, "missing resource");
            ApplyError::MissingResource { item_type, id }
        };

        match self {
            Item::ClipToImageBuffer(item) => {
                let id = item.image_buffer_identifier();
                let buffer = resources
                    .image_buffer(id)
                    .ok_or_else(|| missing(ItemType::ClipToImageBuffer, id))?;
                item.apply_with(surface, buffer);
            }
            Item::DrawFilteredImageBuffer(item) => {
                let source = match item.source_image_identifier() {
                    Some(id) => Some(
                        resources
                            .image_buffer(id)
                            .ok_or_else(|| missing(ItemType::DrawFilteredImageBuffer, id))?,
                    ),
                    None => None,
                };
                item.apply_with(surface, (source, filter_results));
                return Ok(source.is_some());
            }
            Item::DrawGlyphs(item) => {
                let id = item.font_identifier();
                let font = resources
                    .font(id)
                    .ok_or_else(|| missing(ItemType::DrawGlyphs, id))?;
                item.apply_with(surface, font);
            }
            Item::DrawImageBuffer(item) => {
                let id = item.image_buffer_identifier();
                let buffer = resources
                    .image_buffer(id)
                    .ok_or_else(|| missing(ItemType::DrawImageBuffer, id))?;
                item.apply_with(surface, buffer);
            }
            Item::DrawNativeImage(item) => {
                let id = item.image_identifier();
                let image = resources
                    .native_image(id)
                    .ok_or_else(|| missing(ItemType::DrawNativeImage, id))?;
                item.apply_with(surface, image);
            }
            Item::DrawPattern(item) => {
                let id = item.image_identifier();
                let image = resources
                    .source_image(id)
                    .ok_or_else(|| missing(ItemType::DrawPattern, id))?;
                item.apply_with(surface, image);
            }
            Item::PaintFrameForMedia(item) => {
                let id = item.player_identifier();
                let player = resources
                    .media_player(id)
                    .ok_or_else(|| missing(ItemType::PaintFrameForMedia, id))?;
                item.apply_with(surface, player);
            }
            _ => {
                self.apply(surface)?;
                return Ok(false);
            }
        }
        Ok(true)
    }
}
