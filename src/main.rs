mod color;
mod mandelbrot;
mod render;
mod view;

use log::{debug, error, trace};
use pixels::{Error, Pixels, SurfaceTexture};
use std::time::Instant;
use view::{action_for_key, Action, ViewParams};
use winit::dpi::LogicalSize;
use winit::event::{ElementState, Event, KeyboardInput, WindowEvent};
use winit::event_loop::{ControlFlow, EventLoop};
use winit::window::WindowBuilder;

const WIDTH: u32 = 1920;
const HEIGHT: u32 = 1080;
const TITLE: &str = "Mandelbrot Explorer";

fn main() -> Result<(), Error> {
    env_logger::init();

    let event_loop = EventLoop::new();
    let window = WindowBuilder::new()
        .with_title(TITLE)
        .with_inner_size(LogicalSize::new(WIDTH as f64, HEIGHT as f64))
        .with_min_inner_size(LogicalSize::new(320.0, 180.0))
        .build(&event_loop)
        .unwrap();

    let size = window.inner_size();
    let surface_texture = SurfaceTexture::new(size.width, size.height, &window);
    // The raster stays WIDTH x HEIGHT; window resizes only rescale the surface.
    let mut pixels = Pixels::new(WIDTH, HEIGHT, surface_texture)?;

    let mut params = ViewParams::default();
    let mut dirty = true;

    event_loop.run(move |event, _, control_flow| {
        *control_flow = ControlFlow::Poll;
        match event {
            Event::WindowEvent { event, .. } => match event {
                WindowEvent::CloseRequested => *control_flow = ControlFlow::Exit,
                WindowEvent::KeyboardInput { input, .. } => {
                    if let Some(action) = pressed_action(input) {
                        if action == Action::Quit {
                            *control_flow = ControlFlow::Exit;
                        } else if params.apply(action) {
                            trace!("{:?} -> {:?}", action, params);
                            dirty = true;
                        }
                    }
                }
                WindowEvent::Resized(new_size) => {
                    if let Err(e) =
                        pixels.resize_surface(new_size.width.max(1), new_size.height.max(1))
                    {
                        error!("resize surface failed: {e}");
                    }
                }
                WindowEvent::ScaleFactorChanged { new_inner_size, .. } => {
                    if let Err(e) = pixels
                        .resize_surface(new_inner_size.width.max(1), new_inner_size.height.max(1))
                    {
                        error!("scale factor resize failed: {e}");
                    }
                }
                _ => {}
            },
            Event::MainEventsCleared => window.request_redraw(),
            Event::RedrawRequested(_) => {
                if dirty {
                    let started = Instant::now();
                    render::render_frame(&params, pixels.frame_mut(), WIDTH, HEIGHT);
                    debug!("rendered {}x{} in {:?}", WIDTH, HEIGHT, started.elapsed());
                    window.set_title(&format!("{} | {}", TITLE, params.status_line()));
                }
                dirty = false;
                if let Err(e) = pixels.render() {
                    error!("pixels.render() failed: {e}");
                    *control_flow = ControlFlow::Exit;
                }
            }
            _ => {}
        }
    });
}

fn pressed_action(input: KeyboardInput) -> Option<Action> {
    if input.state != ElementState::Pressed {
        return None;
    }
    input.virtual_keycode.and_then(action_for_key)
}
