use brandkit::cli::{Cli, Commands};
use brandkit::commands;
use brandkit::error::AssetError;
use brandkit::logo::{make_lockup, make_mark, process_logo, remove_black_background, LogoOptions};
use image::{Rgba, RgbaImage};

const BLACK: Rgba<u8> = Rgba([0, 0, 0, 255]);
const WHITE: Rgba<u8> = Rgba([255, 255, 255, 255]);
const TEXT: Rgba<u8> = Rgba([60, 60, 60, 255]);

/// Black canvas with a white square icon near the top and grey "text" below.
fn sample_logo() -> RgbaImage {
    let mut img = RgbaImage::from_pixel(200, 120, BLACK);
    for y in 10..60 {
        for x in 70..130 {
            img.put_pixel(x, y, WHITE);
        }
    }
    for y in 80..100 {
        for x in 20..180 {
            img.put_pixel(x, y, TEXT);
        }
    }
    img
}

fn opts() -> LogoOptions {
    LogoOptions {
        pad: 0.0,
        mark_size: 64,
        ..Default::default()
    }
}

#[test]
fn mark_is_square_at_requested_size() {
    let mark = make_mark(&sample_logo(), &opts()).unwrap();
    assert_eq!(mark.dimensions(), (64, 64));

    let default_mark = make_mark(&sample_logo(), &LogoOptions::default()).unwrap();
    assert_eq!(default_mark.dimensions(), (1024, 1024));
}

#[test]
fn mark_letterbox_is_transparent() {
    // The icon area is 60x50, so squaring adds transparent bands top and bottom.
    let mark = make_mark(&sample_logo(), &opts()).unwrap();
    assert_eq!(mark.get_pixel(32, 0)[3], 0);
    assert_eq!(mark.get_pixel(32, 63)[3], 0);
    assert_eq!(*mark.get_pixel(32, 32), WHITE);
}

#[test]
fn mark_requires_white_area() {
    let img = RgbaImage::from_pixel(20, 20, Rgba([200, 200, 200, 255]));
    assert_eq!(make_mark(&img, &opts()).unwrap_err(), AssetError::NoMarkRegion);
}

#[test]
fn background_removal_keeps_dark_text() {
    let mut img = RgbaImage::new(3, 1);
    img.put_pixel(0, 0, Rgba([16, 10, 0, 255]));
    img.put_pixel(1, 0, Rgba([17, 10, 0, 255]));
    img.put_pixel(2, 0, Rgba([5, 5, 5, 0]));

    remove_black_background(&mut img, 16);

    assert_eq!(*img.get_pixel(0, 0), Rgba([16, 10, 0, 0]));
    assert_eq!(*img.get_pixel(1, 0), Rgba([17, 10, 0, 255]));
    assert_eq!(*img.get_pixel(2, 0), Rgba([5, 5, 5, 0]));
}

#[test]
fn lockup_crops_to_visible_content_at_native_resolution() {
    let src = sample_logo();
    let lockup = make_lockup(&src, &opts()).unwrap();

    // Icon spans x 70..130, text x 20..180; together y 10..100.
    assert_eq!(lockup.dimensions(), (160, 90));
    assert_eq!(*lockup.get_pixel(0, 75), TEXT);
    // The gap between icon and text was black background.
    assert_eq!(lockup.get_pixel(5, 55)[3], 0);
}

#[test]
fn lockup_background_is_fully_transparent() {
    let src = sample_logo();
    let opts = LogoOptions {
        pad: 0.1,
        ..opts()
    };
    let lockup = make_lockup(&src, &opts).unwrap();

    for pixel in lockup.pixels() {
        let max = pixel[0].max(pixel[1]).max(pixel[2]);
        if max <= opts.black_threshold {
            assert_eq!(pixel[3], 0);
        }
    }
}

#[test]
fn lockup_requires_content() {
    let img = RgbaImage::from_pixel(20, 20, BLACK);
    assert_eq!(make_lockup(&img, &opts()).unwrap_err(), AssetError::NoLockupContent);
}

#[test]
fn process_logo_writes_both_outputs() {
    let dir = tempfile::tempdir().unwrap();
    let src = dir.path().join("logo.png");
    sample_logo().save(&src).unwrap();

    let out_mark = dir.path().join("brand/mark.png");
    let out_lockup = dir.path().join("brand/nested/lockup.png");
    process_logo(&src, &out_mark, &out_lockup, &opts()).unwrap();

    let mark = image::open(&out_mark).unwrap().to_rgba8();
    let lockup = image::open(&out_lockup).unwrap().to_rgba8();
    assert_eq!(mark.dimensions(), (64, 64));
    assert_eq!(lockup.dimensions(), (160, 90));
}

#[test]
fn process_logo_stops_when_mark_fails() {
    let dir = tempfile::tempdir().unwrap();
    let src = dir.path().join("dark.png");
    RgbaImage::from_pixel(10, 10, TEXT).save(&src).unwrap();

    let out_mark = dir.path().join("mark.png");
    let out_lockup = dir.path().join("lockup.png");
    let err = process_logo(&src, &out_mark, &out_lockup, &opts()).unwrap_err();

    assert_eq!(err.downcast_ref::<AssetError>(), Some(&AssetError::NoMarkRegion));
    assert!(!out_mark.exists());
    assert!(!out_lockup.exists());
}

#[test]
fn zero_mark_size_flag_is_rejected_before_writing() {
    let dir = tempfile::tempdir().unwrap();
    let src = dir.path().join("logo.png");
    sample_logo().save(&src).unwrap();
    let cli = Cli {
        command: Commands::Init,
        config: dir.path().join("brandkit.toml"),
        verbose: false,
    };

    let out_mark = dir.path().join("mark.png");
    let out_lockup = dir.path().join("lockup.png");
    let overrides = commands::logo::Overrides {
        mark_size: Some(0),
        ..Default::default()
    };
    let err = commands::logo::run(&cli, &src, &out_mark, &out_lockup, overrides).unwrap_err();

    assert!(err.to_string().contains("mark_size must be greater than 0"));
    assert!(!out_mark.exists());
    assert!(!out_lockup.exists());

    let out_of_range = commands::logo::Overrides {
        pad: Some(2.0),
        ..Default::default()
    }
    .apply(LogoOptions::default());
    assert!(out_of_range.validate().is_err());
}
