// rigid-object demo: spins a cube about one of its corners and logs the result

use log::info;
use rigid_object::{Object, ObjectError, Vertex};

fn cube() -> Vec<Vertex> {
    #[rustfmt::skip]
    let corners = [
        (-0.5, -0.5,  0.5, "front-bottom-left"),
        ( 0.5, -0.5,  0.5, "front-bottom-right"),
        ( 0.5,  0.5,  0.5, "front-top-right"),
        (-0.5,  0.5,  0.5, "front-top-left"),
        (-0.5, -0.5, -0.5, "back-bottom-left"),
        ( 0.5, -0.5, -0.5, "back-bottom-right"),
        ( 0.5,  0.5, -0.5, "back-top-right"),
        (-0.5,  0.5, -0.5, "back-top-left"),
    ];
    corners
        .iter()
        .map(|&(x, y, z, name)| Vertex::new(x, y, z, name))
        .collect()
}

fn log_vertices(label: &str, object: &Object) {
    info!("{} ({})", label, object.copy_current_position());
    for vertex in object.vertices() {
        info!("  {}", vertex);
    }
}

fn main() -> Result<(), ObjectError> {
    // Initialize logging
    env_logger::init();

    let mut object = Object::new("cube", cube())?;
    object.set_object_offset(0.0, 0.0, -5.0);
    log_vertices("initial", &object);

    // Pivot about the front-top-right corner
    object.set_new_origin(3)?;

    let start = object.copy_current_position();
    for step in 1..=4 {
        object.rel_rotate_abs_ref(0.0, 90.0, 0.0);
        log_vertices(&format!("after quarter turn {}", step), &object);
    }

    object.rel_translate(1.0, 0.0, 0.0);
    log_vertices("after translate", &object);
    object.undo();
    log_vertices("after undo", &object);

    object.set_position(&start);
    log_vertices("back at start", &object);

    Ok(())
}
