//! Named panels of the image-generation editor.
//!
//! Each builder is a fixed composition; the only input is the layout config.

use super::{
    Button, Collapse, Direction, Panel, PanelConfig, PanelError, Parameter, ParameterGroup, PromptArea,
};

pub const PROCESS_BUTTONS: &str = "process-buttons";
pub const OPTIONS: &str = "options";
pub const TEXT_TO_IMAGE: &str = "text-to-image";

/// Every panel name `compose` accepts.
pub const PANEL_NAMES: [&str; 3] = [PROCESS_BUTTONS, OPTIONS, TEXT_TO_IMAGE];

/// Build a panel by name.
///
/// # Errors
///
/// Returns `PanelError::UnknownPanel` for names outside `PANEL_NAMES`, or a
/// build error if a composition is malformed.
pub fn compose(name: &str, config: PanelConfig) -> Result<Panel, PanelError> {
    match name {
        PROCESS_BUTTONS => process_buttons(config),
        OPTIONS => options(config),
        TEXT_TO_IMAGE => text_to_image(config),
        other => Err(PanelError::UnknownPanel(other.to_owned())),
    }
}

/// Invoke and cancel, laid out side by side.
///
/// # Errors
///
/// Returns a build error if section keys collide.
pub fn process_buttons(config: PanelConfig) -> Result<Panel, PanelError> {
    Panel::builder(PROCESS_BUTTONS, config.with_direction(Direction::Row))
        .section("invoke", Button::new("Invoke", "generate").with_tooltip("Generate images from the prompt"))
        .section("cancel", Button::new("Cancel", "cancel"))
        .build()
}

/// Accordion of the optional generation parameters.
///
/// # Errors
///
/// Returns a build error if section keys collide.
pub fn options(config: PanelConfig) -> Result<Panel, PanelError> {
    let group = |key: &str, title: &str, parameters: Vec<Parameter>| {
        Panel::builder(key, config)
            .section("parameters", ParameterGroup { title: title.to_owned(), parameters })
            .build()
    };

    let seed = group(
        "seed-and-variation",
        "Seed & Variation",
        vec![
            Parameter::number("seed", "Seed", 0.0, 4_294_967_295.0, 1.0, 0.0),
            Parameter::toggle("random_seed", "Randomize Seed", true),
            Parameter::number("variation_amount", "Variation Amount", 0.0, 1.0, 0.01, 0.1),
        ],
    )?;
    let upscale = group(
        "upscale",
        "Upscale",
        vec![
            Parameter::choice("upscale_level", "Scale", &["2", "4"], "4"),
            Parameter::number("upscale_strength", "Strength", 0.0, 1.0, 0.05, 0.75),
        ],
    )?;
    let face_restore = group(
        "face-restoration",
        "Face Restoration",
        vec![
            Parameter::choice("facetool_type", "Type", &["gfpgan", "codeformer"], "gfpgan"),
            Parameter::number("facetool_strength", "Strength", 0.0, 1.0, 0.05, 0.8),
        ],
    )?;
    let img2img = group(
        "image-to-image",
        "Image to Image",
        vec![
            Parameter::number("img2img_strength", "Image To Image Strength", 0.0, 0.99, 0.01, 0.75),
            Parameter::toggle("fit", "Fit Initial Image To Output Size", true),
        ],
    )?;
    let output = group(
        "output",
        "Output",
        vec![Parameter::toggle("seamless", "Seamless Tiling", false), Parameter::toggle("hires_fix", "High Resolution Optimizations", false)],
    )?;

    Panel::builder(OPTIONS, config)
        .section("seed-and-variation", Collapse::new("Seed & Variation", seed).opened())
        .section("upscale", Collapse::new("Upscale", upscale))
        .section("face-restoration", Collapse::new("Face Restoration", face_restore))
        .section("image-to-image", Collapse::new("Image to Image", img2img))
        .section("output", Collapse::new("Output", output))
        .build()
}

/// The text-to-image screen: prompt, process buttons, core parameters, options.
///
/// # Errors
///
/// Returns a build error if section keys collide.
pub fn text_to_image(config: PanelConfig) -> Result<Panel, PanelError> {
    let core = ParameterGroup {
        title: "Core Parameters".into(),
        parameters: vec![
            Parameter::number("iterations", "Images", 1.0, 16.0, 1.0, 1.0),
            Parameter::number("steps", "Steps", 1.0, 150.0, 1.0, 50.0),
            Parameter::number("cfg_scale", "CFG Scale", 1.01, 30.0, 0.5, 7.5),
            Parameter::choice("width", "Width", &["256", "512", "768", "1024"], "512"),
            Parameter::choice("height", "Height", &["256", "512", "768", "1024"], "512"),
            Parameter::choice("sampler", "Sampler", &["ddim", "plms", "k_lms", "k_euler", "k_euler_a", "k_heun"], "k_lms"),
        ],
    };

    Panel::builder(TEXT_TO_IMAGE, config)
        .section("prompt", PromptArea { placeholder: "I'm dreaming of...".into(), rows: 5 })
        .section(PROCESS_BUTTONS, process_buttons(config)?)
        .section("core-parameters", core)
        .section(OPTIONS, options(config)?)
        .build()
}
