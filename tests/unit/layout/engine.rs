//! Tests for collage configuration, placement offsets and per-image orchestration

#[cfg(test)]
mod tests {
    use huesort::SourceImage;
    use huesort::color::Hsv;
    use huesort::io::configuration::MAX_CANVAS_DIMENSION;
    use huesort::layout::engine::{
        CollageConfig, LayoutEngine, Placement, PlacementRect, SkipReason, placement_offset,
    };
    use image::{Rgb, Rgba};

    const WHITE: Rgba<u8> = Rgba([255, 255, 255, 255]);

    fn small_config(silhouette: bool) -> CollageConfig {
        CollageConfig {
            target_width: 100,
            target_height: 100,
            max_size: 40,
            silhouette,
        }
    }

    fn hsv_at(hue: u16, value: f64) -> Hsv {
        Hsv {
            hue,
            saturation: 1.0,
            value,
        }
    }

    // Tests defaults and the margin added to the canvas
    // Verified by dropping the margin from one axis
    #[test]
    fn test_config_defaults_and_canvas_size() {
        let config = CollageConfig::default();

        assert_eq!(config.target_width, 4000);
        assert_eq!(config.target_height, 4000);
        assert_eq!(config.max_size, 400);
        assert!(!config.silhouette);
        assert_eq!(config.canvas_dimensions(), (4400, 4400));
        assert_eq!(small_config(false).canvas_dimensions(), (140, 140));
    }

    // Tests zero-sized and overflowing configurations are rejected
    // Verified by skipping validation in the engine constructor
    #[test]
    fn test_config_validation() {
        assert!(small_config(false).validate().is_ok());

        let zero_width = CollageConfig {
            target_width: 0,
            ..small_config(false)
        };
        let zero_max = CollageConfig {
            max_size: 0,
            ..small_config(false)
        };
        let overflow = CollageConfig {
            target_height: u32::MAX,
            ..small_config(false)
        };

        assert!(zero_width.validate().is_err());
        assert!(zero_max.validate().is_err());
        assert!(overflow.validate().is_err());
        assert!(LayoutEngine::new(zero_max).is_err());
    }

    // Tests canvases too large to allocate are rejected instead of panicking
    // Verified by only checking the u32 sum of target and margin
    #[test]
    fn test_config_validation_rejects_huge_canvas() {
        let huge = CollageConfig {
            target_width: 3_000_000_000,
            target_height: 3_000_000_000,
            max_size: 400,
            silhouette: false,
        };
        assert!(huge.validate().is_err());
        assert!(LayoutEngine::new(huge).is_err());

        let one_side_too_long = CollageConfig {
            target_width: MAX_CANVAS_DIMENSION,
            ..small_config(false)
        };
        assert!(one_side_too_long.validate().is_err());

        let at_limit = CollageConfig {
            target_width: MAX_CANVAS_DIMENSION - 40,
            target_height: 10,
            max_size: 40,
            silhouette: false,
        };
        assert!(at_limit.validate().is_ok());
    }

    // Tests hue drives x and value drives y with the half-margin centring
    // Verified by dividing the hue before multiplying by the width
    #[test]
    fn test_placement_offset() {
        assert_eq!(placement_offset(&small_config(false), hsv_at(0, 1.0), 40, 40), (0, 100));
        assert_eq!(
            placement_offset(&CollageConfig::default(), hsv_at(180, 0.5), 400, 200),
            (2000, 2100)
        );
        assert_eq!(placement_offset(&small_config(false), hsv_at(300, 0.0), 40, 20), (83, 10));
    }

    // Tests extreme colours keep the full rectangle inside the canvas
    // Verified by removing the half-margin from the offset
    #[test]
    fn test_extreme_placements_fit() {
        let config = CollageConfig {
            target_width: 1000,
            target_height: 700,
            max_size: 41,
            silhouette: false,
        };
        let (canvas_width, canvas_height) = config.canvas_dimensions();

        for (hue, value) in [(0, 0.0), (359, 1.0), (0, 1.0), (359, 0.0)] {
            for (width, height) in [(41, 41), (41, 1), (1, 41)] {
                let (x, y) = placement_offset(&config, hsv_at(hue, value), width, height);
                assert!(x >= 0 && y >= 0);
                assert!(x + i64::from(width) <= i64::from(canvas_width));
                assert!(y + i64::from(height) <= i64::from(canvas_height));
            }
        }
    }

    // Tests a small red image is upscaled and drawn at the hue 0, value 1 corner
    // Verified by skipping the resize step
    #[test]
    fn test_place_red_block() {
        let mut engine = LayoutEngine::new(small_config(false)).unwrap();
        let red = SourceImage::from_pixel(2, 2, Rgba([u16::MAX, 0, 0, u16::MAX]));

        let placement = engine.place(&red);

        match placement {
            Placement::Placed { rect, color, hsv } => {
                assert_eq!(
                    rect,
                    PlacementRect {
                        x: 0,
                        y: 100,
                        width: 40,
                        height: 40
                    }
                );
                assert_eq!(color, Rgb([255, 0, 0]));
                assert_eq!(hsv.hue, 0);
            }
            Placement::Skipped(_) => unreachable!("Expected the red block to be placed"),
        }

        let canvas = engine.canvas();
        let red_pixel = Some(Rgba([255, 0, 0, 255]));
        assert_eq!(canvas.pixel(0, 100), red_pixel);
        assert_eq!(canvas.pixel(39, 139), red_pixel);
        assert_eq!(canvas.pixel(40, 100), Some(WHITE));
        assert_eq!(canvas.pixel(0, 99), Some(WHITE));
    }

    // Tests silhouette mode paints the average colour at the hue/value position
    // Verified by disabling the silhouette fill
    #[test]
    fn test_place_silhouette() {
        let mut engine = LayoutEngine::new(small_config(true)).unwrap();
        let mut image = SourceImage::new(2, 1);
        image.put_pixel(0, 0, Rgba([u16::MAX, 0, 0, u16::MAX]));
        image.put_pixel(1, 0, Rgba([0, 0, u16::MAX, u16::MAX]));

        let Placement::Placed { rect, color, hsv } = engine.place(&image) else {
            unreachable!("Expected the image to be placed");
        };

        assert_eq!(color, Rgb([127, 0, 127]));
        assert_eq!(hsv.hue, 300);
        assert_eq!((rect.x, rect.y, rect.width, rect.height), (83, 59, 40, 20));

        let canvas = engine.canvas();
        let purple = Some(Rgba([127, 0, 127, 255]));
        assert_eq!(canvas.pixel(83, 59), purple);
        assert_eq!(canvas.pixel(122, 78), purple);
        assert_eq!(canvas.pixel(123, 78), Some(WHITE));
    }

    // Tests images without opaque pixels are skipped and leave the canvas untouched
    // Verified by placing degenerate images with a black average
    #[test]
    fn test_skip_transparent_image() {
        let mut engine = LayoutEngine::new(small_config(false)).unwrap();
        let ghost = SourceImage::from_pixel(3, 3, Rgba([0, u16::MAX, 0, 1000]));

        assert_eq!(
            engine.place(&ghost),
            Placement::Skipped(SkipReason::NoOpaquePixels)
        );
        assert!(engine.into_canvas().as_image().pixels().all(|p| *p == WHITE));
    }

    // Tests identical inputs produce identical canvases
    // Verified by making placement depend on engine state
    #[test]
    fn test_deterministic() {
        let images = [
            SourceImage::from_pixel(3, 5, Rgba([0, u16::MAX, 0, u16::MAX])),
            SourceImage::from_pixel(7, 2, Rgba([9000, 30_000, 60_000, u16::MAX])),
        ];

        let render = || {
            let mut engine = LayoutEngine::new(small_config(false)).unwrap();
            for image in &images {
                engine.place(image);
            }
            engine.into_canvas().into_image()
        };

        assert_eq!(render(), render());
    }
}
