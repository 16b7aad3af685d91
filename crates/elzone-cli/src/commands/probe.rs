//! Single code value probe.
//!
//! Walks one neutral code value through every pipeline stage and prints the
//! intermediate values.

use crate::ProbeArgs;
use anyhow::{Result, bail};
use elzone_color::{ZoneConfig, color_of, luminance, quantize, stops, to_reference_gamut};
use elzone_transfer::clamp01;
use tracing::trace;

/// Parses `"107"` as an 8-bit code and anything else numeric (`"0.42"`,
/// `"1e-1"`) as normalized.
fn parse_code(code: &str) -> Result<f32> {
    if let Ok(v) = code.parse::<u8>() {
        return Ok(v as f32 / 255.0);
    }
    if code.bytes().all(|b| b.is_ascii_digit()) {
        bail!("8-bit code value out of range: {code}");
    }
    let v: f32 = code.parse()?;
    if !(0.0..=1.0).contains(&v) {
        bail!("normalized code value out of range: {code}");
    }
    Ok(v)
}

/// Prints the pipeline stages for one neutral code value.
pub fn run(args: ProbeArgs, config: &ZoneConfig) -> Result<()> {
    trace!(code = %args.code, "probe::run");
    let (pipeline, params) = super::setup(&args.zone, config)?;
    let curve = pipeline.registry().resolve(params.curve());

    let encoded = parse_code(&args.code)?;
    let remapped = params.levels().remap(encoded);
    let linear = curve.decode(clamp01(remapped));
    let display = to_reference_gamut(curve, [linear; 3]).map(|c| c.max(0.0));
    let y = luminance(display, pipeline.luma());
    let s = stops(y, curve, params.exposure());
    let zone = quantize(s);

    println!("curve     {} ({})", curve.key, curve.label);
    println!("levels    {}", params.levels().name());
    println!("code      {:.6} ({:.1}/255)", encoded, encoded * 255.0);
    println!("remapped  {remapped:.6}");
    println!("linear    {linear:.6}");
    println!("rec709    [{:.6}, {:.6}, {:.6}]", display[0], display[1], display[2]);
    println!("luma      {y:.6} ({})", pipeline.luma());
    println!("stops     {s:+.3} (exposure {:+})", params.exposure());
    println!("zone      {zone} {}", color_of(zone));
    if let Some(encode) = curve.encode {
        let grey = encode(curve.mid_grey);
        println!("mid-grey  {:.6} ({:.1}/255)", grey, grey * 255.0);
    }
    Ok(())
}
