use beryllium::{
  init::InitFlags,
  video::{CreateWinArgs, GlContextFlags, GlProfile},
  Sdl,
};
use gl_api::{consts::*, global, ApiKind, Feature, GlApiError};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), GlApiError> {
  tracing_subscriber::fmt()
    .with_env_filter(
      EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info")),
    )
    .init();

  // Initializes SDL2
  let sdl = Sdl::init(InitFlags::VIDEO);
  if cfg!(target_os = "macos") {
    // For Mac, just ask for the best core profile supported.
    sdl.set_gl_profile(GlProfile::Core).unwrap();
    sdl.set_gl_context_major_version(4).unwrap();
    sdl.set_gl_context_minor_version(1).unwrap();
  } else {
    sdl.set_gl_profile(GlProfile::Core).unwrap();
    sdl.set_gl_context_major_version(3).unwrap();
    sdl.set_gl_context_minor_version(3).unwrap();
  }
  let mut flags = GlContextFlags::default();
  if cfg!(target_os = "macos") {
    flags |= GlContextFlags::FORWARD_COMPATIBLE;
  }
  flags |= GlContextFlags::DEBUG;
  sdl.set_gl_context_flags(flags).unwrap();

  // Makes the window with a GL Context.
  let win = sdl
    .create_gl_window(CreateWinArgs {
      title: "gl_api info",
      ..Default::default()
    })
    .unwrap();

  let report =
    unsafe { global::load_global(|name| win.get_proc_address(name)) }?;
  let gl = global::gl();

  if let Some(info) = gl.context_info() {
    println!("Vendor:   {}", info.vendor);
    println!("Renderer: {}", info.renderer);
    println!("Version:  {}", info.version);
    println!("GLSL:     {}", info.shading_language_version);
  }
  println!("Parsed as {} ({} profile)", report.version, report.profile);
  let api = report.version.api;
  if let Some(newest) = gl.features().newest_version(api) {
    println!("Newest supported version flag: {newest}");
  }
  println!(
    "{} of {} symbols loaded, {} extensions advertised",
    report.resolved,
    gl_api::SYMBOLS.len(),
    report.extension_count
  );

  println!("Tracked extensions:");
  for feature in gl.features().iter().filter(|f| f.version().is_none()) {
    println!("  {}", feature.name());
  }
  if !report.is_complete() {
    println!("Missing entry points of supported features:");
    for name in &report.missing {
      println!("  {name}");
    }
  }

  if api == ApiKind::Desktop && gl.has_feature(Feature::GL_KHR_debug) {
    match gl.set_tracing_debug_message_callback() {
      Ok(()) => unsafe {
        gl.enable_debug_output(true);
        // provoke a message so the callback has something to show
        gl.Enable(GL_INVALID_ENUM);
      },
      Err(err) => println!("Couldn't set the debug callback: {err}"),
    }
  }
  for err in unsafe { gl.drain_errors() } {
    println!("GL error: {err}");
  }
  Ok(())
}
