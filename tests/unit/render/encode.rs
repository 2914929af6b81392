use std::io::Cursor;

use image::AnimationDecoder;

use super::*;

fn temp_dir(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!(
        "pixmotion_{name}_{}_{}",
        std::process::id(),
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap()
            .as_nanos()
    ))
}

fn frame(rgba: [u8; 4]) -> FrameRGBA {
    FrameRGBA::new(2, 1, [rgba, rgba].concat()).unwrap()
}

#[test]
fn png_frames_are_numbered_and_unpremultiplied() {
    let tmp = temp_dir("png_frames");
    let frames = [frame([255, 0, 0, 255]), frame([64, 0, 0, 128])];
    let paths = write_png_frames(&frames, &tmp, "clip").unwrap();

    assert_eq!(paths.len(), 2);
    assert!(paths[0].ends_with("clip_0000.png"));
    assert!(paths[1].ends_with("clip_0001.png"));

    let second = image::open(&paths[1]).unwrap().to_rgba8();
    assert_eq!(second.dimensions(), (2, 1));
    assert_eq!(second.get_pixel(0, 0).0, [128, 0, 0, 128]);

    std::fs::remove_dir_all(&tmp).ok();
}

#[test]
fn gif_keeps_frame_count_and_delay() {
    let frames = [
        frame([255, 0, 0, 255]),
        frame([0, 255, 0, 255]),
        frame([0, 0, 255, 255]),
    ];
    let mut buf = Vec::new();
    write_gif(&frames, 80, &mut buf).unwrap();

    let decoded = image::codecs::gif::GifDecoder::new(Cursor::new(buf))
        .unwrap()
        .into_frames()
        .collect_frames()
        .unwrap();
    assert_eq!(decoded.len(), 3);
    let (numer, denom) = decoded[0].delay().numer_denom_ms();
    assert_eq!(numer / denom, 80);
    assert_eq!(decoded[0].buffer().dimensions(), (2, 1));
}

#[test]
fn gif_without_frames_is_rejected() {
    let mut buf = Vec::new();
    assert!(matches!(
        write_gif(&[], 50, &mut buf),
        Err(PixmotionError::Validation(_))
    ));
}
