//! Text to strokes operator
//!
//! Validates the host selection, loads the chosen font, runs layout and
//! assembly, and swaps the result into the scene. The operator remembers its
//! source object by name so a redo can find it again after the host has
//! rebuilt its objects.

use super::scene::{ObjectData, Scene};
use crate::core::errors::{InvocationError, StrokeTextError};
use crate::font_source::{FontProvider, FontSelection};
use crate::geometry::curve::assemble;
use crate::layout::layout;
use tracing::{debug, info};

/// Suffix appended to the source name to name the generated curve
pub const CURVE_NAME_SUFFIX: &str = " strokes";

#[derive(Clone, Debug, Default)]
pub struct StrokeTextOperator {
    pub font: FontSelection,
    /// Remove the source text object once the curve exists
    pub delete_text: bool,
    source_name: Option<String>,
}

impl StrokeTextOperator {
    pub fn new(font: FontSelection, delete_text: bool) -> Self {
        Self {
            font,
            delete_text,
            source_name: None,
        }
    }

    /// Name of the text object this operator was invoked on
    pub fn source_name(&self) -> Option<&str> {
        self.source_name.as_deref()
    }

    /// Whether the operator can be offered for the current scene
    pub fn poll(scene: &Scene) -> bool {
        scene.active().is_some_and(|object| {
            matches!(object.data, ObjectData::Text { .. } | ObjectData::Curve(_))
        })
    }

    /// First run: validate the active selection and remember the source
    ///
    /// Returns the name of the created curve object.
    pub fn invoke(
        &mut self,
        scene: &mut Scene,
        provider: &dyn FontProvider,
    ) -> Result<String, StrokeTextError> {
        let source = scene
            .active()
            .filter(|object| object.selected)
            .ok_or(InvocationError::NothingSelected)?;
        if !matches!(source.data, ObjectData::Text { .. }) {
            return Err(InvocationError::NotText {
                name: source.name.clone(),
                kind: source.data.kind_name(),
            }
            .into());
        }
        self.source_name = Some(source.name.clone());
        self.run(scene, provider)
    }

    /// Re-run with the current properties against the remembered source
    pub fn execute(
        &mut self,
        scene: &mut Scene,
        provider: &dyn FontProvider,
    ) -> Result<String, StrokeTextError> {
        self.run(scene, provider)
    }

    fn run(&self, scene: &mut Scene, provider: &dyn FontProvider) -> Result<String, StrokeTextError> {
        let source_name = self.source_name.as_deref().ok_or(InvocationError::NotInvoked)?;
        let source = scene
            .get(source_name)
            .ok_or_else(|| InvocationError::SourceMissing {
                name: source_name.to_string(),
            })?;
        let ObjectData::Text { body } = &source.data else {
            return Err(InvocationError::NotText {
                name: source_name.to_string(),
                kind: source.data.kind_name(),
            }
            .into());
        };

        let font = self.font.resolve(provider)?;
        if let Some(font) = &font {
            let missing = font.missing_glyph_count(body);
            if missing > 0 {
                debug!("{} characters of '{}' have no glyph, drawing boxes", missing, source_name);
            }
        }

        let curve = assemble(layout(body, font.as_ref()));
        info!(
            "Converted '{}' into {} strokes ({} points)",
            source_name,
            curve.splines.len(),
            curve.point_count()
        );

        let curve_name = scene.add_object(
            &format!("{source_name}{CURVE_NAME_SUFFIX}"),
            ObjectData::Curve(curve),
        );
        scene.deselect_all();
        scene.set_active(&curve_name);
        if self.delete_text {
            scene.remove(source_name);
            debug!("Removed source text object '{}'", source_name);
        }
        Ok(curve_name)
    }
}
