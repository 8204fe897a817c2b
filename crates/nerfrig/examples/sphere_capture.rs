//! Places a camera rig around an in-memory subject and exports a dataset.
//!
//! Run with: cargo run --example sphere_capture

use nerfrig::*;

fn main() -> Result<()> {
    init()?;

    let mut scene = MemoryScene::new();
    let subject = scene.add_object("subject", Vec3::ZERO);
    scene.set_active_object(subject);

    set_rig_params(RigParams {
        horizontal_count: 8,
        vertical_count: 3,
        distance: 5.0,
        fov_degrees: 40.0,
    })?;
    set_render_settings(RenderSettings {
        width: 256,
        height: 256,
        transparent_background: true,
    })?;

    let placed = generate_cameras(&mut scene)?;
    println!("placed {placed} cameras");

    let report = render_dataset(&mut scene, None)?;
    println!(
        "rendered {} frames into {}",
        report.frame_count,
        report.output_dir.display()
    );

    clear_cameras(&mut scene)?;
    shutdown();
    Ok(())
}
