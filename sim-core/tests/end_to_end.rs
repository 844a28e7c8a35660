use constellation_core::{
    Config, Dimensions, Scene,
    layout,
    render::{DrawCommand, DrawList},
};
use glam::Vec2;

/// A 400x400 surface with 40-unit spacing tiles from 40 to 360 on both
/// axes.
#[test]
fn square_surface_grid_layout() {
    let field = layout::generate(Dimensions::new(400.0, 400.0), &Config::default());

    let xs = layout::grid_axis(400.0, 40.0);
    assert_eq!(xs.first(), Some(&40.0));
    assert_eq!(xs.last(), Some(&360.0));
    assert_eq!(xs.len(), 9);
    assert_eq!(field.len(), xs.len() * xs.len());

    for p in &field {
        assert!(p.pos.x >= 40.0 && p.pos.x < 400.0);
        assert!(p.pos.y >= 40.0 && p.pos.y < 400.0);
    }
}

/// Pointer placed exactly on a particle: that particle stays finite, its
/// neighbours move away, and particles beyond the influence radius are
/// untouched.
#[test]
fn pointer_on_particle_frame() -> constellation_core::Result<()> {
    let mut scene = Scene::new(Config::default(), Dimensions::new(400.0, 400.0))?;
    let pointer = Vec2::new(40.0, 40.0);
    scene.pointer_moved(pointer);

    let before: Vec<Vec2> = scene.field().iter().map(|p| p.pos).collect();
    let mut list = DrawList::default();
    assert!(scene.tick(&mut list));

    for (p, old) in scene.field().iter().zip(&before) {
        assert!(p.pos.is_finite(), "non-finite position {:?}", p.pos);

        let old_distance = old.distance(pointer);
        let new_distance = p.pos.distance(pointer);
        if old_distance < 100.0 {
            assert!(
                new_distance >= old_distance,
                "particle at {old:?} moved toward the pointer"
            );
        } else {
            assert_eq!(p.pos, *old, "particle at {old:?} should be unaffected");
        }
    }

    let coincident = scene
        .field()
        .iter()
        .find(|p| p.rest() == pointer)
        .expect("grid has a particle at (40, 40)");
    assert_eq!(coincident.pos, pointer);

    let neighbour = scene
        .field()
        .iter()
        .find(|p| p.rest() == Vec2::new(80.0, 40.0))
        .expect("grid has a particle at (80, 40)");
    // distance 40, force 0.6, speed 8 -> pushed 4.8 to the right
    assert!((neighbour.pos - Vec2::new(84.8, 40.0)).length() < 1e-4);
    Ok(())
}

/// After the pointer leaves, every particle drifts back to rest and the
/// frame draws no self links.
#[test]
fn field_settles_after_pointer_leaves() -> constellation_core::Result<()> {
    let mut scene = Scene::new(Config::default(), Dimensions::new(400.0, 400.0))?;
    let mut list = DrawList::default();

    scene.pointer_moved(Vec2::new(200.0, 200.0));
    for _ in 0..10 {
        scene.tick(&mut list);
    }
    let max_offset = |scene: &Scene| {
        scene
            .field()
            .iter()
            .map(|p| p.offset_from_rest().length())
            .fold(0.0f32, f32::max)
    };
    assert!(max_offset(&scene) > 1.0);

    scene.pointer_left();
    for _ in 0..200 {
        scene.tick(&mut list);
    }
    assert!(max_offset(&scene) < 0.01);

    for cmd in list.lines() {
        if let DrawCommand::Line { from, to, stroke } = cmd {
            assert_ne!(from, to);
            assert!(stroke.alpha > 0.0 && stroke.alpha <= 1.0);
        }
    }
    Ok(())
}
