use std::path::PathBuf;

use photo_poster::config::{Configuration, Mode, PosterSize};

#[test]
fn parse_minimal_config_uses_defaults() {
    let yaml = r#"
image-folder: "/photos"
"#;
    let cfg: Configuration = serde_yaml::from_str(yaml).unwrap();
    assert_eq!(cfg.image_folder, PathBuf::from("/photos"));
    assert_eq!(cfg.output_grid, PathBuf::from("poster-grid.jpg"));
    assert_eq!(cfg.output_mosaic, PathBuf::from("poster-mosaic.jpg"));
    assert_eq!(cfg.mode, Mode::Both);
    assert_eq!(
        cfg.poster_size,
        PosterSize {
            width: 3508,
            height: 2480
        }
    );
    assert_eq!(cfg.background, [0, 0, 0]);
    assert_eq!(cfg.extensions, ["png", "jpg", "jpeg", "gif", "bmp"]);
    assert!(!cfg.recursive);
    assert_eq!(cfg.shuffle_seed, None);
}

#[test]
fn parse_full_config() {
    let yaml = r#"
image-folder: "/photos"
output-grid: "out/grid.png"
output-mosaic: "out/mosaic.png"
mode: mosaic
poster-size:
  width: 1200
  height: 900
background: [255, 255, 255]
extensions: [png]
recursive: true
shuffle-seed: 7
"#;
    let cfg: Configuration = serde_yaml::from_str(yaml).unwrap();
    assert_eq!(cfg.mode, Mode::Mosaic);
    assert_eq!(
        cfg.poster_size,
        PosterSize {
            width: 1200,
            height: 900
        }
    );
    assert_eq!(cfg.background, [255, 255, 255]);
    assert_eq!(cfg.extensions, ["png"]);
    assert!(cfg.recursive);
    assert_eq!(cfg.shuffle_seed, Some(7));
}

#[test]
fn unrecognized_mode_is_a_config_error() {
    let yaml = r#"
image-folder: "/photos"
mode: collage
"#;
    assert!(serde_yaml::from_str::<Configuration>(yaml).is_err());
}

#[test]
fn unknown_key_is_rejected() {
    let yaml = r#"
image-folder: "/photos"
poster-sizes: [1, 2]
"#;
    assert!(serde_yaml::from_str::<Configuration>(yaml).is_err());
}

#[test]
fn zero_poster_size_fails_validation() {
    let yaml = r#"
image-folder: "/photos"
poster-size:
  width: 0
  height: 100
"#;
    let cfg: Configuration = serde_yaml::from_str(yaml).unwrap();
    assert!(cfg.validate().is_err());
}

#[test]
fn default_config_validates() {
    let yaml = r#"
image-folder: "/photos"
"#;
    let cfg: Configuration = serde_yaml::from_str(yaml).unwrap();
    cfg.validate().unwrap();
}
