use std::fs;
use std::path::PathBuf;

use tessel_blocks::model::{CROSS_PARENT, Model, ModelArena, ModelLoad, ModelLoadError, ModelLoader, ModelShape};
use tessel_blocks::{Direction, FaceQuad};

fn stock_models_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../assets/models/block")
}

fn v_range(q: &FaceQuad) -> (f32, f32) {
    let vs = q.uvs().map(|uv| uv[1]);
    let lo = vs.iter().copied().fold(f32::INFINITY, f32::min);
    let hi = vs.iter().copied().fold(f32::NEG_INFINITY, f32::max);
    (lo, hi)
}

const FULL_CUBE: &str = r#"{
  "cuboids": [
    {
      "bounds": [0, 0, 0, 16, 16, 16],
      "faces": {
        "down": { "texture_index": 2 },
        "up": { "texture_index": 0 },
        "north": { "texture_index": 3 },
        "south": { "texture_index": 3 },
        "west": { "texture_index": 3 },
        "east": { "texture_index": 3 }
      }
    }
  ]
}"#;

#[test]
fn full_cube_has_one_quad_per_direction() {
    let model = Model::from_json_str(FULL_CUBE).unwrap();
    assert_eq!(model.shape(), ModelShape::Cuboids);
    for dir in Direction::ALL {
        assert_eq!(model.faces(dir).len(), 1, "{dir}");
        let q = &model.faces(dir)[0];
        let n = dir.normal();
        // Every vertex lies on the face plane of the unit cube
        let plane = if n.x + n.y + n.z > 0.0 { 1.0 } else { 0.0 };
        for p in q.positions() {
            let along = (p[0] * n.x + p[1] * n.y + p[2] * n.z).abs();
            assert!((along - plane).abs() < 1e-6, "{dir}: {p:?}");
        }
    }
    assert_eq!(model.quad_count(), 6);
}

#[test]
fn top_face_uses_its_own_tile() {
    let model = Model::from_json_str(FULL_CUBE).unwrap();
    let up = &model.faces(Direction::Up)[0];
    // Texture 0 is the top-left tile
    assert!(up.uvs().iter().all(|uv| uv[0] <= 16.0 / 256.0 && uv[1] <= 16.0 / 256.0));
    let down = &model.faces(Direction::Down)[0];
    // Texture 2 starts 32px in
    assert!(down.uvs().iter().all(|uv| uv[0] >= 32.0 / 256.0 && uv[0] <= 48.0 / 256.0));
}

#[test]
fn cross_model_spreads_quads_over_horizontal_directions() {
    let json = format!(r#"{{ "parent": "{CROSS_PARENT}", "texture_index": 6 }}"#);
    let model = Model::from_json_str(&json).unwrap();
    assert!(model.is_cross());
    assert!(model.faces(Direction::Up).is_empty());
    assert!(model.faces(Direction::Down).is_empty());
    assert_eq!(model.faces(Direction::North).len() + model.faces(Direction::South).len(), 2);
    assert_eq!(model.faces(Direction::West).len() + model.faces(Direction::East).len(), 2);
    assert_eq!(model.quad_count(), 4);

    // Front and back of a plane share corners in reverse winding
    let front = &model.faces(Direction::North)[0];
    let back = &model.faces(Direction::South)[0];
    assert_eq!(front.vertices[0].pos, back.vertices[1].pos);
    assert_eq!(front.vertices[1].pos, back.vertices[0].pos);

    // Planes span the diagonal of the block, full height
    for (_, q) in model.iter() {
        for p in q.positions() {
            assert!((0.0..=1.0).contains(&p[0]) && (0.0..=1.0).contains(&p[2]));
            assert!(p[1] == 0.0 || p[1] == 1.0);
        }
    }
}

#[test]
fn side_faces_crop_texture_to_cuboid_height() {
    let json = r#"{
      "cuboids": [
        {
          "bounds": [0, 8, 0, 16, 16, 16],
          "faces": {
            "north": { "texture_index": 0 },
            "up": { "texture_index": 0 }
          }
        }
      ]
    }"#;
    let model = Model::from_json_str(json).unwrap();
    let (v0, v1) = v_range(&model.faces(Direction::North)[0]);
    // v-origin 16 - 16 = 0, v-size 16 - 8 = 8
    assert_eq!(v0, 0.0);
    assert_eq!(v1, 8.0 / 256.0);
    // Top faces keep the whole tile
    let (t0, t1) = v_range(&model.faces(Direction::Up)[0]);
    assert_eq!((t0, t1), (0.0, 16.0 / 256.0));
    assert!(model.faces(Direction::South).is_empty());
}

#[test]
fn bottom_half_crops_lower_part_of_tile() {
    let json = r#"{ "cuboids": [ { "bounds": [0, 0, 0, 16, 8, 16],
        "faces": { "east": { "texture_index": 17 } } } ] }"#;
    let model = Model::from_json_str(json).unwrap();
    let (v0, v1) = v_range(&model.faces(Direction::East)[0]);
    // Tile 17 sits on the second row (16px down), cropped to its lower half
    assert_eq!(v0, (16.0 + 8.0) / 256.0);
    assert_eq!(v1, (16.0 + 16.0) / 256.0);
}

#[test]
fn explicit_uv_overrides_default_crop() {
    let json = r#"{ "cuboids": [ { "bounds": [0, 0, 0, 16, 8, 16],
        "faces": { "west": { "texture_index": 0, "uv": [4, 2, 8, 6] } } } ] }"#;
    let model = Model::from_json_str(json).unwrap();
    let q = &model.faces(Direction::West)[0];
    let (v0, v1) = v_range(q);
    assert_eq!((v0, v1), (2.0 / 256.0, 8.0 / 256.0));
    let us = q.uvs().map(|uv| uv[0]);
    assert!(us.contains(&(4.0 / 256.0)) && us.contains(&(12.0 / 256.0)));
}

fn rotated_cube(degrees: i32) -> Model {
    let json = format!(
        r#"{{ "cuboids": [ {{ "bounds": [0, 0, 0, 16, 16, 16],
            "faces": {{
                "up": {{ "texture_index": 0, "rotation": {degrees} }},
                "south": {{ "texture_index": 0, "rotation": {degrees} }}
            }} }} ] }}"#
    );
    Model::from_json_str(&json).unwrap()
}

#[test]
fn quarter_turn_rotation_maps_exact_corners() {
    let (u0, v0, u1, v1) = (0.0, 0.0, 16.0 / 256.0, 16.0 / 256.0);
    for degrees in [90, 450] {
        let model = rotated_cube(degrees);
        let up = &model.faces(Direction::Up)[0];
        assert_eq!(up.uvs(), [[u0, v1], [u1, v1], [u1, v0], [u0, v0]], "{degrees}");
        let south = &model.faces(Direction::South)[0];
        assert_eq!(south.uvs(), [[u1, v1], [u1, v0], [u0, v0], [u0, v1]], "{degrees}");
    }
}

#[test]
fn three_quarter_turn_is_the_inverse_step() {
    let (u0, v0, u1, v1) = (0.0, 0.0, 16.0 / 256.0, 16.0 / 256.0);
    let model = rotated_cube(270);
    let up = &model.faces(Direction::Up)[0];
    assert_eq!(up.uvs(), [[u1, v0], [u0, v0], [u0, v1], [u1, v1]]);
    let south = &model.faces(Direction::South)[0];
    assert_eq!(south.uvs(), [[u0, v0], [u0, v1], [u1, v1], [u1, v0]]);
}

#[test]
fn cuboids_missing_bounds_or_faces_are_skipped() {
    let json = r#"{ "cuboids": [
        { "faces": { "up": { "texture_index": 1 } } },
        { "bounds": [0, 0, 0, 16, 16, 16] },
        { "bounds": [0, 0, 0, 16, 1, 16], "faces": { "up": { "texture_index": 1 } } }
    ] }"#;
    let model = Model::from_json_str(json).unwrap();
    assert_eq!(model.quad_count(), 1);
    let up = &model.faces(Direction::Up)[0];
    assert!(up.positions().iter().all(|p| p[1] == 1.0 / 16.0));
}

#[test]
fn multiple_cuboids_append_in_order() {
    let json = r#"{ "cuboids": [
        { "bounds": [0, 0, 0, 16, 8, 16], "faces": { "north": { "texture_index": 1 } } },
        { "bounds": [0, 8, 0, 8, 16, 16], "faces": { "north": { "texture_index": 2 } } }
    ] }"#;
    let model = Model::from_json_str(json).unwrap();
    let north = model.faces(Direction::North);
    assert_eq!(north.len(), 2);
    assert!(north[0].positions().iter().all(|p| p[1] <= 0.5));
    assert!(north[1].positions().iter().all(|p| p[1] >= 0.5 && p[0] <= 0.5));
}

#[test]
fn missing_file_degrades_to_empty_model() {
    let dir = tempfile::tempdir().unwrap();
    let loader = ModelLoader::new(dir.path());
    let load = loader.load("does_not_exist");
    assert!(!load.is_loaded());
    assert!(matches!(load.error(), Some(ModelLoadError::Io { .. })));
    assert!(load.model().is_empty());
    for dir in Direction::ALL {
        assert!(load.model().faces(dir).is_empty());
    }
}

#[test]
fn malformed_json_degrades_to_empty_model() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("broken.json"), "{ \"cuboids\": [ { \"bounds\": [0, 0").unwrap();
    fs::write(
        dir.path().join("no_texture.json"),
        r#"{ "cuboids": [ { "bounds": [0,0,0,16,16,16], "faces": { "up": {} } } ] }"#,
    )
    .unwrap();
    let loader = ModelLoader::new(dir.path());
    for name in ["broken", "no_texture"] {
        let load = loader.load(name);
        assert!(matches!(load.error(), Some(ModelLoadError::Parse(_))), "{name}");
        assert!(load.into_model().is_empty());
    }
}

#[test]
fn unknown_face_name_degrades() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(
        dir.path().join("odd.json"),
        r#"{ "cuboids": [ { "bounds": [0,0,0,16,16,16], "faces": { "top": { "texture_index": 0 } } } ] }"#,
    )
    .unwrap();
    let load = ModelLoader::new(dir.path()).load("odd");
    match load {
        ModelLoad::Degraded { model, error: ModelLoadError::UnknownFace(name) } => {
            assert_eq!(name, "top");
            assert!(model.is_empty());
        }
        other => panic!("expected unknown face, got {other:?}"),
    }
}

#[test]
fn arena_loads_each_name_once_and_records_failures() {
    let loader = ModelLoader::new(stock_models_dir());
    let mut arena = ModelArena::new();
    let a = arena.load_or_get(&loader, "stone");
    let b = arena.load_or_get(&loader, "stone");
    let c = arena.load_or_get(&loader, "missing_model");
    assert_eq!(a, b);
    assert_ne!(a, c);
    assert_eq!(arena.len(), 2);
    assert_eq!(arena.get(a).unwrap().quad_count(), 6);
    assert!(arena.get(c).unwrap().is_empty());
    assert_eq!(arena.degraded().len(), 1);
    assert_eq!(arena.degraded()[0].0, "missing_model");
    assert_eq!(arena.id_by_name("stone"), Some(a));
}

#[test]
fn stock_models_all_load() {
    let loader = ModelLoader::new(stock_models_dir());
    for name in ["stone", "grass", "dirt", "cobblestone", "planks", "sapling"] {
        let load = loader.load(name);
        assert!(load.is_loaded(), "{name}: {:?}", load.error());
    }
    assert!(loader.load("sapling").model().is_cross());
}
