//! Pixelframe demo host
//!
//! Opens a window, sizes the logical surface from `pixelframe.ron`, and
//! draws a small animated scene through the software renderer every frame.

use macroquad::prelude::{
    clear_background, draw_text, draw_texture_ex, get_time, next_frame, screen_height,
    screen_width, Conf, DrawTextureParams, FilterMode, Texture2D, Vec2, BLACK, WHITE,
};
use pixelframe::assets::load_image;
use pixelframe::{
    Color, Config, DrawOptions, Font, FrameClock, Rect, Renderer, ShapeOptions, SpriteOptions,
    Surface, TextAlign, TextOptions, VerticalAlign, Viewport, VERSION,
};

const CONFIG_PATH: &str = "pixelframe.ron";

const BACKGROUND: Color = Color::new(20, 18, 28);
const ACCENT: Color = Color::new(0, 190, 230);

fn window_conf() -> Conf {
    Conf {
        window_title: format!("Pixelframe v{}", VERSION),
        window_width: 196 * 4,
        window_height: 196 * 3,
        window_resizable: true,
        ..Default::default()
    }
}

/// Presents frames as a nearest-filtered texture scaled into the window
struct WindowSurface {
    viewport: Viewport,
}

impl Surface for WindowSurface {
    fn size(&self) -> (usize, usize) {
        (self.viewport.width, self.viewport.height)
    }

    fn present(&mut self, pixels: &[u8], width: usize, height: usize) {
        let texture = Texture2D::from_rgba8(width as u16, height as u16, pixels);
        texture.set_filter(FilterMode::Nearest);

        let scale = self.viewport.scale as f32;
        clear_background(BLACK);
        draw_texture_ex(
            &texture,
            self.viewport.offset_x,
            self.viewport.offset_y,
            WHITE,
            DrawTextureParams {
                dest_size: Some(Vec2::new(width as f32 * scale, height as f32 * scale)),
                ..Default::default()
            },
        );
    }
}

fn load_config() -> Config {
    match Config::load(CONFIG_PATH) {
        Ok(config) => {
            println!("Loaded {}", CONFIG_PATH);
            config
        }
        Err(e) => {
            println!("Using default config ({})", e);
            Config::default()
        }
    }
}

/// Scene drawn every frame
fn draw_scene(r: &mut Renderer, t: f32) {
    let (w, h) = (r.width() as f32, r.height() as f32);
    r.clear(BACKGROUND);

    for i in 0..8 {
        let x = w * i as f32 / 8.0;
        r.line(x, 0.0, w - x, h - 1.0, Color::new(40, 36, 60));
    }

    // Back-to-front order does not matter with depth
    let bob = (t * 2.0).sin() * 10.0;
    r.circle(w / 2.0, h / 2.0 + bob, 24.0, DrawOptions::with_depth(ACCENT, 2.0));
    r.rect(
        w / 2.0 - 30.0,
        h / 2.0 - 8.0,
        60.0,
        16.0,
        ShapeOptions { color: Color::new(230, 80, 90), depth: Some(1.0), fill: true },
    );

    let orbit_x = w / 2.0 + (t.cos() * w / 3.0);
    let orbit_y = h / 2.0 + (t.sin() * h / 3.0);
    if r.spritesheet.is_some() {
        let opt = SpriteOptions { flip_x: t.cos() < 0.0, flip_y: false, depth: Some(3.0) };
        r.sprite(orbit_x - 8.0, orbit_y - 8.0, Rect::new(0, 0, 16, 16), opt);
    } else {
        r.circle(orbit_x, orbit_y, 4.0, DrawOptions::with_depth(Color::WHITE, 3.0));
    }

    if r.font.is_some() {
        let title = TextOptions {
            color: Color::WHITE,
            depth: Some(4.0),
            align: TextAlign::Center,
            vertical_align: VerticalAlign::Top,
            width: None,
        };
        r.text("PIXELFRAME", w / 2.0, 4.0, title);

        let body = TextOptions {
            color: Color::new(180, 180, 190),
            align: TextAlign::Center,
            vertical_align: VerticalAlign::Bottom,
            width: Some(w - 16.0),
            ..Default::default()
        };
        r.text(
            "Lines, circles, sprites and wrapped text, all through one depth-tested pixel write.",
            w / 2.0,
            h - 4.0,
            body,
        );
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    // Renderer usage errors (missing sprite sheet or font) arrive as warnings
    tracing_subscriber::fmt::init();

    let config = load_config();

    let mut surface = WindowSurface {
        viewport: Viewport::compute(screen_width(), screen_height(), &config),
    };

    let mut renderer = match Renderer::new(&surface) {
        Ok(r) => r,
        Err(e) => {
            eprintln!("{}", e);
            return;
        }
    };

    if let Some(path) = &config.spritesheet {
        match load_image(path) {
            Ok(sheet) => {
                println!("Loaded sprite sheet: {} ({}x{})", path, sheet.width, sheet.height);
                renderer.spritesheet = Some(sheet);
            }
            Err(e) => eprintln!("Failed to load {}: {}", path, e),
        }
    }

    if let Some(font) = &config.font {
        match load_image(&font.src) {
            Ok(img) => {
                let font = Font::new(img, font.w, font.h, &font.letters);
                println!("Loaded font: {} glyphs", font.letters.len());
                renderer.font = Some(font);
            }
            Err(e) => eprintln!("Failed to load {}: {}", font.src, e),
        }
    }

    // Darken every other row for a scanline look
    renderer = renderer.with_postprocess(|c, row, _col| {
        if row % 2 == 1 {
            c.shade(0.85)
        } else {
            c
        }
    });

    let mut clock = FrameClock::new();
    let mut window_size = (screen_width(), screen_height());

    println!("=== Pixelframe ===");

    loop {
        let size = (screen_width(), screen_height());
        if size != window_size {
            window_size = size;
            surface.viewport = Viewport::compute(size.0, size.1, &config);
            renderer.resize(&surface);
        }

        clock.tick(get_time());
        draw_scene(&mut renderer, clock.elapsed as f32);
        renderer.update(&mut surface);

        if config.show_fps {
            draw_text(&format!("fps: {:.0}", clock.fps()), 4.0, 16.0, 16.0, WHITE);
        }

        clock.end_frame();
        next_frame().await;
    }
}
