#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod demo;
pub mod matrix;
pub mod shape;
pub mod transform;

use std::fmt;

use demo::ExampleOperations;
use matrix::Matrix;
use serde::Serialize;
use shape::{Shape, ShapeKind};
use transform::{Reflection, Transform, TransformKind};
use wasm_bindgen::prelude::*;

cfg_if::cfg_if! {
    if #[cfg(all(feature = "console_error_panic_hook", target_arch = "wasm32"))] {
        #[wasm_bindgen(start)]
        pub fn initialize() {
            console_error_panic_hook::set_once();
            init_logger();
        }
    } else {
        #[wasm_bindgen(start)]
        pub fn initialize() {
            // no-op fallback when panic hook is disabled
            init_logger();
        }
    }
}

#[cfg(feature = "debug_logs")]
fn init_logger() {
    use log::LevelFilter;
    use wasm_bindgen_console_logger::DEFAULT_LOGGER;
    if log::set_logger(&DEFAULT_LOGGER).is_ok() {
        log::set_max_level(LevelFilter::Debug);
    }
}

#[cfg(not(feature = "debug_logs"))]
fn init_logger() {
    // no-op fallback when debug logs are disabled
}

#[derive(Debug, Serialize)]
struct PointsExport {
    shape: &'static str,
    original: Vec<[f64; 2]>,
    #[serde(skip_serializing_if = "Option::is_none")]
    transformed: Option<Vec<[f64; 2]>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

#[derive(Debug, Serialize)]
struct TransformExport {
    kind: &'static str,
    code: u32,
    label: String,
    parameters: Vec<f64>,
    matrix: Matrix,
}

impl From<&Transform> for TransformExport {
    fn from(transform: &Transform) -> Self {
        let kind = transform.kind();
        Self {
            kind: kind.name(),
            code: kind.code(),
            label: transform.to_string(),
            parameters: transform.parameters(),
            matrix: transform.matrix(),
        }
    }
}

/// Publiek toegangspunt voor de JavaScript-kant: houdt de gekozen vorm en de
/// lijst transformaties bij en herberekent de getransformeerde vorm.
#[wasm_bindgen]
pub struct Visualizer {
    shape: ShapeKind,
    transforms: Vec<Transform>,
    transformed: Option<Shape>,
    last_error: Option<String>,
    result_dirty: bool,
}

#[wasm_bindgen]
impl Visualizer {
    #[wasm_bindgen(constructor)]
    pub fn new() -> Visualizer {
        Visualizer {
            shape: ShapeKind::default(),
            transforms: Vec::new(),
            transformed: None,
            last_error: None,
            result_dirty: true,
        }
    }

    /// Namen van alle beschikbare vormen, voor de vormkiezer.
    #[wasm_bindgen]
    pub fn shape_names(&self) -> Result<JsValue, JsValue> {
        let names: Vec<&str> = ShapeKind::ALL.iter().map(|kind| kind.name()).collect();
        serde_wasm_bindgen::to_value(&names).map_err(to_js_error)
    }

    /// Kies een vorm op naam (hoofdletterongevoelig).
    #[wasm_bindgen]
    pub fn select_shape(&mut self, name: &str) -> Result<(), JsValue> {
        let Some(kind) = ShapeKind::from_name(name) else {
            return Err(js_error("onbekende vorm"));
        };
        if kind != self.shape {
            self.shape = kind;
            self.result_dirty = true;
        }
        Ok(())
    }

    /// Voeg achteraan een transformatie toe met de standaardparameters van
    /// de gegeven soortcode.
    #[wasm_bindgen]
    pub fn add_transform(&mut self, kind_code: u32) -> Result<(), JsValue> {
        let kind = TransformKind::from_code(kind_code)
            .ok_or_else(|| js_error("onbekende transformatiesoort"))?;
        self.transforms.push(Transform::default_for(kind));
        self.result_dirty = true;
        Ok(())
    }

    /// Verwijder de laatste transformatie. Geeft terug of er iets verwijderd is.
    #[wasm_bindgen]
    pub fn remove_transform(&mut self) -> bool {
        let removed = self.transforms.pop().is_some();
        self.result_dirty |= removed;
        removed
    }

    #[wasm_bindgen]
    pub fn transform_count(&self) -> usize {
        self.transforms.len()
    }

    /// Wissel de soort van transformatie `index`; de parameters worden
    /// teruggezet.
    #[wasm_bindgen]
    pub fn set_transform_kind(&mut self, index: usize, kind_code: u32) -> Result<(), JsValue> {
        let kind = TransformKind::from_code(kind_code)
            .ok_or_else(|| js_error("onbekende transformatiesoort"))?;
        self.transform_mut(index)?.set_kind(kind);
        self.result_dirty = true;
        Ok(())
    }

    /// Zet parameter `slot` van transformatie `index`.
    #[wasm_bindgen]
    pub fn set_parameter(&mut self, index: usize, slot: usize, value: f64) -> Result<(), JsValue> {
        if !value.is_finite() {
            return Err(js_error("parameter moet een eindig getal zijn"));
        }
        if !self.transform_mut(index)?.set_parameter(slot, value) {
            return Err(js_error("transformatie heeft deze parameter niet"));
        }
        self.result_dirty = true;
        Ok(())
    }

    /// Kies de spiegelas van een `Reflect`-transformatie.
    #[wasm_bindgen]
    pub fn set_reflection(&mut self, index: usize, axis_code: u32) -> Result<(), JsValue> {
        let transform = self.transform_mut(index)?;
        let Transform::Reflect { axis } = transform else {
            return Err(js_error("transformatie is geen spiegeling"));
        };
        *axis = Reflection::from_code(axis_code);
        self.result_dirty = true;
        Ok(())
    }

    /// Zet één cel van de matrix van een `Custom`-transformatie.
    #[wasm_bindgen]
    pub fn set_custom_entry(
        &mut self,
        index: usize,
        row: usize,
        col: usize,
        value: f64,
    ) -> Result<(), JsValue> {
        if !value.is_finite() {
            return Err(js_error("matrixwaarde moet een eindig getal zijn"));
        }
        let transform = self.transform_mut(index)?;
        let Transform::Custom { matrix } = transform else {
            return Err(js_error("transformatie is geen custom matrix"));
        };
        let cell = matrix
            .get_mut(row, col)
            .ok_or_else(|| js_error("matrixcel bestaat niet"))?;
        *cell = value;
        self.result_dirty = true;
        Ok(())
    }

    /// Vervang de hele lijst transformaties, bijvoorbeeld
    /// `[{ type: "Rotate", degrees: 90 }]`.
    #[wasm_bindgen]
    pub fn load_transforms(&mut self, transforms: JsValue) -> Result<(), JsValue> {
        let transforms: Vec<Transform> =
            serde_wasm_bindgen::from_value(transforms).map_err(to_js_error)?;
        self.replace_transforms(transforms)
    }

    /// Herbereken de getransformeerde vorm wanneer er iets gewijzigd is.
    ///
    /// Een fout in de algebra (bijvoorbeeld een custom matrix met verkeerde
    /// afmetingen) wordt bewaard en als fout teruggegeven; de vorige
    /// getransformeerde vorm vervalt dan.
    #[wasm_bindgen]
    pub fn recompute(&mut self) -> Result<(), JsValue> {
        if !self.result_dirty {
            return match &self.last_error {
                Some(message) => Err(js_error(message)),
                None => Ok(()),
            };
        }

        let original = self.shape.shape();
        self.result_dirty = false;
        match original.transform(&self.transforms) {
            Ok(shape) => {
                self.transformed = Some(shape);
                self.last_error = None;
                Ok(())
            }
            Err(error) => {
                self.transformed = None;
                self.last_error = Some(error.to_string());
                Err(to_js_error(error))
            }
        }
    }

    /// Haalt de originele en getransformeerde punten op.
    #[wasm_bindgen]
    pub fn get_points(&self) -> Result<JsValue, JsValue> {
        if self.result_dirty {
            return Err(js_error("vorm is nog niet herberekend"));
        }
        let export = PointsExport {
            shape: self.shape.name(),
            original: self.shape.shape().vertices(),
            transformed: self.transformed_vertices(),
            error: self.last_error.clone(),
        };
        serde_wasm_bindgen::to_value(&export).map_err(to_js_error)
    }

    /// Beschrijving van elke transformatie inclusief de bijbehorende matrix.
    #[wasm_bindgen]
    pub fn describe_transforms(&self) -> Result<JsValue, JsValue> {
        let exports: Vec<TransformExport> =
            self.transforms.iter().map(TransformExport::from).collect();
        serde_wasm_bindgen::to_value(&exports).map_err(to_js_error)
    }

    /// Willekeurige voorbeelden van vermenigvuldiging en inversie. Met een
    /// seed is de uitkomst reproduceerbaar.
    #[wasm_bindgen]
    pub fn example_operations(&self, seed: Option<u64>) -> Result<JsValue, JsValue> {
        let operations = match seed {
            Some(seed) => {
                let mut rng: rand::rngs::StdRng = rand::SeedableRng::seed_from_u64(seed);
                ExampleOperations::generate(&mut rng)
            }
            None => ExampleOperations::generate(&mut rand::rng()),
        }
        .map_err(to_js_error)?;
        serde_wasm_bindgen::to_value(&operations).map_err(to_js_error)
    }
}

impl Default for Visualizer {
    fn default() -> Self {
        Self::new()
    }
}

impl Visualizer {
    #[must_use]
    pub fn selected_shape(&self) -> ShapeKind {
        self.shape
    }

    #[must_use]
    pub fn transforms(&self) -> &[Transform] {
        &self.transforms
    }

    /// Punten van de laatst berekende vorm, `None` zolang er niets (geldigs)
    /// berekend is.
    #[must_use]
    pub fn transformed_vertices(&self) -> Option<Vec<[f64; 2]>> {
        if self.result_dirty {
            return None;
        }
        self.transformed.as_ref().map(Shape::vertices)
    }

    /// Vervangt de lijst; bij een niet-eindige waarde blijft de huidige
    /// lijst staan.
    pub fn replace_transforms(&mut self, transforms: Vec<Transform>) -> Result<(), JsValue> {
        if let Some(index) = transforms.iter().position(|t| !t.is_finite()) {
            log::warn!("transformatie {index} bevat een niet-eindige waarde");
            return Err(js_error("parameters moeten eindige getallen zijn"));
        }
        log::debug!("{} transformaties geladen", transforms.len());
        self.transforms = transforms;
        self.result_dirty = true;
        Ok(())
    }

    #[must_use]
    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    fn transform_mut(&mut self, index: usize) -> Result<&mut Transform, JsValue> {
        self.transforms
            .get_mut(index)
            .ok_or_else(|| js_error("ongeldige transformatie-index"))
    }
}

fn to_js_error<E: fmt::Display>(error: E) -> JsValue {
    js_error(&error.to_string())
}

fn js_error(message: &str) -> JsValue {
    #[cfg(target_arch = "wasm32")]
    {
        wasm_bindgen::JsError::new(message).into()
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = message;
        JsValue::NULL
    }
}

#[cfg(test)]
mod tests {
    use super::{TransformExport, Visualizer};
    use crate::transform::{Transform, TransformKind};

    #[test]
    fn starts_dirty_with_triangle() {
        let visualizer = Visualizer::new();
        assert_eq!(visualizer.selected_shape().name(), "triangle");
        assert!(visualizer.transformed_vertices().is_none());
    }

    #[test]
    fn remove_on_empty_list_is_a_no_op() {
        let mut visualizer = Visualizer::new();
        visualizer.recompute().expect("recompute");
        assert!(!visualizer.remove_transform());
        assert!(visualizer.transformed_vertices().is_some());
    }

    #[test]
    fn transform_export_carries_label_and_matrix() {
        let export = TransformExport::from(&Transform::Shear { kx: 1.0, ky: 0.0 });
        assert_eq!(export.kind, "Shear");
        assert_eq!(export.code, TransformKind::Shear.code());
        assert_eq!(export.label, "Shear: (1, 0)");
        assert_eq!(export.parameters, vec![1.0, 0.0]);
        assert_eq!(export.matrix.get(0, 1), Some(1.0));
    }
}
