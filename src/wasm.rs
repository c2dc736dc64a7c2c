//! WASM bindings for the sociogram-core library.
//!
//! All functions exposed to JavaScript via wasm-bindgen are defined here.
//! Entry points take and return JSON strings; bad input comes back as an
//! error envelope (or a thrown constructor error), never a panic.

use serde_json::to_string;
use wasm_bindgen::prelude::*;

use crate::layout::{layout_graph, ForceSimulation, LayoutConfig};
use crate::output::{CohortGraphOutput, LayoutOutput};
use crate::roster::{build_graph, Cohort, Graph};

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = console, js_name = log)]
    pub fn console_log(s: &str);

    #[wasm_bindgen(js_namespace = console, js_name = error)]
    pub fn console_error(s: &str);
}

/// Build the relationship graph for one cohort snapshot and return it
/// with metrics and unresolved-name diagnostics attached.
#[wasm_bindgen]
pub fn build_cohort_graph(cohort_json: &str) -> String {
    let cohort: Cohort = match serde_json::from_str(cohort_json) {
        Ok(cohort) => cohort,
        Err(e) => {
            console_error(&format!("Error parsing cohort: {e}"));
            let error_output =
                CohortGraphOutput::from_error("", format!("invalid cohort JSON: {e}"));
            return to_string(&error_output).unwrap();
        }
    };

    let output = match build_graph(&cohort) {
        Ok(graph) => CohortGraphOutput::from_graph(&cohort.id, &graph),
        Err(e) => {
            console_error(&format!("Error building graph: {e}"));
            CohortGraphOutput::from_error(&cohort.id, e.msg)
        }
    };
    to_string(&output).unwrap()
}

/// Run the configured layout engine once over a cohort snapshot and
/// return positions keyed by entry id. Continuous force configs are
/// rejected here; construct a `SimulationHandle` for those.
#[wasm_bindgen]
pub fn compute_layout(cohort_json: &str, config_json: &str) -> String {
    let cohort: Cohort = match serde_json::from_str(cohort_json) {
        Ok(cohort) => cohort,
        Err(e) => {
            console_error(&format!("Error parsing cohort: {e}"));
            return to_string(&LayoutOutput::from_error(format!(
                "invalid cohort JSON: {e}"
            )))
            .unwrap();
        }
    };
    let cfg: LayoutConfig = match serde_json::from_str(config_json) {
        Ok(cfg) => cfg,
        Err(e) => {
            console_error(&format!("Error parsing layout config: {e}"));
            return to_string(&LayoutOutput::from_error(format!(
                "invalid layout config JSON: {e}"
            )))
            .unwrap();
        }
    };

    let graph = match build_graph(&cohort) {
        Ok(graph) => graph,
        Err(e) => {
            console_error(&format!("Error building graph: {e}"));
            return to_string(&LayoutOutput::from_error(e.msg)).unwrap();
        }
    };

    let output = match layout_graph(&graph, &cfg) {
        Ok(positions) => LayoutOutput::from_positions(&graph, &positions),
        Err(e) => {
            console_error(&format!("Error running layout: {e}"));
            LayoutOutput::from_error(e.msg)
        }
    };
    to_string(&output).unwrap()
}

/// A force simulation held across the boundary.
///
/// JavaScript owns the tick loop (typically requestAnimationFrame) and
/// stops it by calling `cancel` or dropping the handle; the simulation
/// never schedules anything itself. The config's `layoutMode` is
/// ignored, a handle always runs the force engine.
#[wasm_bindgen]
pub struct SimulationHandle {
    graph: Graph,
    sim: ForceSimulation,
}

#[wasm_bindgen]
impl SimulationHandle {
    /// Build a simulation seeded from the ring layout. Throws on
    /// malformed JSON, invalid config, or a snapshot that fails the
    /// graph build.
    #[wasm_bindgen(constructor)]
    pub fn new(cohort_json: &str, config_json: &str) -> Result<SimulationHandle, JsError> {
        let cohort: Cohort = serde_json::from_str(cohort_json).map_err(|e| {
            console_error(&format!("Error parsing cohort: {e}"));
            JsError::new(&format!("invalid cohort JSON: {e}"))
        })?;
        let cfg: LayoutConfig = serde_json::from_str(config_json).map_err(|e| {
            console_error(&format!("Error parsing layout config: {e}"));
            JsError::new(&format!("invalid layout config JSON: {e}"))
        })?;
        cfg.validate().map_err(|e| {
            console_error(&format!("Error validating layout config: {e}"));
            JsError::new(&e.msg)
        })?;
        let graph = build_graph(&cohort).map_err(|e| {
            console_error(&format!("Error building graph: {e}"));
            JsError::new(&e.msg)
        })?;

        let sim = ForceSimulation::new(&graph, &cfg);
        Ok(SimulationHandle { graph, sim })
    }

    /// Advance one tick and return the largest distance any node moved.
    /// Returns 0.0 once cancelled, so a caller can also use the return
    /// value against its own epsilon to decide when to stop animating.
    pub fn tick(&mut self) -> f64 {
        self.sim.tick()
    }

    /// Tick until movement drops below the configured epsilon, returning
    /// the number of ticks run.
    pub fn run_to_convergence(&mut self) -> usize {
        self.sim.run_to_convergence()
    }

    /// Current frame as a layout payload keyed by entry id.
    pub fn positions(&self) -> String {
        to_string(&LayoutOutput::from_positions(&self.graph, &self.sim.positions())).unwrap()
    }

    pub fn cancel(&mut self) {
        self.sim.cancel();
    }

    pub fn is_cancelled(&self) -> bool {
        self.sim.is_cancelled()
    }
}
