//! Renders a small showcase scene to a PNG.
//!
//! Usage: `render_scene [OUTPUT] [RESOLUTION]`, for example
//! `RUST_LOG=info cargo run --release --example render_scene -- out.png 1280x720`.

use anyhow::Result;
use rey_core::{
    AmbientLight, Attenuation, Camera, CameraSettings, Colour, Cylinder, Factors, Light, Material,
    Plane, Polygon, Resolution, Scene, Sphere, Triangle, Tube,
};
use rey_math::{DVec3, NormalizedVector, Ray};
use rey_renderer::{ImageFileSink, PhongTracer, RenderSettings, Renderer};

fn main() -> Result<()> {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let output = args.next().unwrap_or_else(|| "render.png".to_string());
    let resolution: Resolution = match args.next() {
        Some(text) => text.parse()?,
        None => Resolution::new(800, 450)?,
    };

    let start = std::time::Instant::now();
    let scene = build_scene(resolution)?;
    log::info!(
        "Scene '{}' built in {:?}: {} geometries, {} lights",
        scene.name,
        start.elapsed(),
        scene.geometry_count(),
        scene.light_count()
    );

    let tracer = PhongTracer::new(&scene);
    let sink = ImageFileSink::for_camera(&output, &scene.camera);
    let settings = RenderSettings::default()
        .with_threads(std::thread::available_parallelism().map_or(3, |n| n.get()))
        .with_antialiasing(3);

    let stats = Renderer::new(&scene.camera, &tracer, settings).render(&sink)?;
    println!(
        "Rendered {} pixels on {} threads in {:.2?} -> {}",
        stats.pixels, stats.threads, stats.elapsed, output
    );
    Ok(())
}

fn build_scene(resolution: Resolution) -> Result<Scene> {
    let camera = Camera::new(
        CameraSettings::default()
            .with_location(DVec3::new(-150.0, 0.0, 20.0))
            .with_view_plane(160.0, 90.0)
            .with_distance(150.0)
            .with_resolution(resolution),
    )?;

    let mut scene = Scene::new("showcase", camera)
        .with_background(Colour::new(0.05, 0.07, 0.12))
        .with_ambient(AmbientLight::new(Colour::new(0.08, 0.08, 0.08)));

    let floor = Material::new(30.0, 0.5, 0.3)
        .with_ambient(Factors::uniform(0.5))
        .with_reflectivity(Factors::uniform(0.3));
    scene.add_geometry(Plane::new(floor, DVec3::new(0.0, 0.0, -20.0), NormalizedVector::Z));

    let red = Material::new(80.0, 0.6, 0.4)
        .with_emission(Colour::new(0.25, 0.02, 0.02))
        .with_reflectivity(Factors::uniform(0.2));
    scene.add_geometry(Sphere::new(red, DVec3::new(80.0, 10.0, 0.0), 20.0)?);

    let glass = Material::new(200.0, 0.1, 0.8)
        .with_emission(Colour::new(0.0, 0.05, 0.1))
        .with_transparency(Factors::new(0.6, 0.7, 0.8));
    scene.add_geometry(Sphere::new(glass, DVec3::new(30.0, -35.0, -5.0), 15.0)?);

    let gold = Material::new(40.0, 0.5, 0.5).with_emission(Colour::new(0.2, 0.15, 0.02));
    scene.add_geometry(Cylinder::new(
        gold,
        Ray::new(DVec3::new(50.0, 45.0, -20.0), NormalizedVector::Z),
        10.0,
        35.0,
    )?);

    let column = Material::new(10.0, 0.7, 0.1).with_emission(Colour::new(0.05, 0.1, 0.05));
    scene.add_geometry(Tube::new(
        column,
        Ray::new(DVec3::new(220.0, -90.0, 0.0), NormalizedVector::Z),
        8.0,
    )?);

    let wall = Material::new(5.0, 0.6, 0.0).with_emission(Colour::new(0.05, 0.05, 0.15));
    scene.add_geometry(Polygon::new(
        wall,
        &[
            DVec3::new(180.0, -60.0, -20.0),
            DVec3::new(180.0, 60.0, -20.0),
            DVec3::new(180.0, 60.0, 60.0),
            DVec3::new(180.0, -60.0, 60.0),
        ],
    )?);

    let mirror = Material::new(100.0, 0.1, 0.2).with_reflectivity(Factors::uniform(0.8));
    scene.add_geometry(Triangle::new(
        mirror,
        DVec3::new(120.0, -80.0, -20.0),
        DVec3::new(140.0, -40.0, -20.0),
        DVec3::new(130.0, -60.0, 30.0),
    )?);

    scene.add_light(Light::point(
        Colour::new(0.6, 0.6, 0.6),
        DVec3::new(0.0, -50.0, 80.0),
        Attenuation::new(1.0, 0.0005, 0.00001)?,
    ));
    scene.add_light(Light::spot(
        Colour::new(0.8, 0.5, 0.3),
        DVec3::new(40.0, 60.0, 60.0),
        NormalizedVector::new(DVec3::new(1.0, -1.0, -1.5))?,
        Attenuation::new(1.0, 0.001, 0.0)?,
    ));
    scene.add_light(Light::narrow_spot(
        Colour::new(0.4, 0.6, 1.0),
        DVec3::new(-20.0, -60.0, 40.0),
        NormalizedVector::new(DVec3::new(1.0, 0.5, -0.8))?,
        Attenuation::NONE,
        0.6,
    )?);
    scene.add_light(Light::directional(
        Colour::new(0.15, 0.15, 0.2),
        NormalizedVector::new(DVec3::new(1.0, 1.0, -2.0))?,
    ));
    scene.add_light(Light::ambient(Colour::new(0.03, 0.03, 0.03)));

    Ok(scene)
}
