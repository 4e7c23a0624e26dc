#![cfg(target_arch = "wasm32")]

use wasm_bindgen_test::*;

use aquarelle_engine::Simulation;

#[wasm_bindgen_test]
fn facade_constructs_ticks_and_drains() {
    let mut sim = Simulation::new(64, 64);
    assert_eq!(sim.width(), 64);

    sim.set_random_seed(42);
    assert!(sim.stroke(10, 10, 200, 90, 50));
    sim.tick();
    assert_eq!(sim.frame(), 1);

    let drained = sim.collect_repaints();
    assert!(drained >= 1);
    assert_eq!(sim.repaint_list_len(), drained);
}
