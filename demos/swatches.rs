use std::{env,
          io::{BufWriter, Write},
          fs::File,
          error::Error};
use wardrobe_harmony::{generate_color_plan, Color, EngineRequest,
                       Formality, MetalPreference, PRESETS};

type Err = Box<dyn Error>;

/// The gray with the same perceived brightness as `c`.
fn to_gray(c: Color) -> Color {
    let x = (255. * c.luma()).round() as u8;
    Color::new(x, x, x)
}

fn table_of_colors(fh: &mut impl Write, colors: &[Color],
                   width: u32, comment: &str) -> Result<(), Err> {
    writeln!(fh, "<table style=\"border: 0px;  border-spacing: 0px\"><tr>")?;
    for &c in colors {
        writeln!(fh, "  <td style=\"width: {width}px; height: 30px; \
                      background-color: {c}\" title=\"{c}\"></td>")?;
    }
    writeln!(fh, "<td rowspan=\"2\" style=\"padding-left: 7px\">\
                  {comment}</td></tr><tr>")?;
    for &c in colors {
        writeln!(fh, "  <td style=\"width: {width}px; height: 12px; \
                      background-color: {}\"></td>", to_gray(c))?;
    }
    writeln!(fh, "</tr></table><br/>")?;
    Ok(())
}

fn plan(fh: &mut impl Write, base: Color, formality: Formality,
        metal: MetalPreference) -> Result<(), Err> {
    let req = EngineRequest { base_colors: vec![base.to_string()],
                              formality, preferred_metal: metal };
    let plan = generate_color_plan(&req)?;
    writeln!(fh, "<h4>{base} ({formality}, {metal})</h4>")?;
    for s in &plan.suggestions {
        let comment = format!("<b>{}</b>: {}", s.title, s.details);
        table_of_colors(fh, &s.colors, 40, &comment)?;
    }
    Ok(())
}


fn main() -> Result<(), Err> {
    let mut fh = BufWriter::new(File::create("swatches.html")?);
    writeln!(fh, "<html>\n\
                  <head>\n\
                  <title>Wardrobe harmony: {}</title>\n\
                  </head>\n\
                  <body>",
             env::args().next().unwrap_or_default())?;

    writeln!(fh, "<h3>Presets</h3>")?;
    table_of_colors(&mut fh, &PRESETS, 40, "base colors")?;

    writeln!(fh, "<h3>Plans</h3>")?;
    for base in PRESETS {
        plan(&mut fh, base, Formality::Casual, MetalPreference::Both)?;
    }

    writeln!(fh, "<h3>Formality and metal</h3>")?;
    let navy = PRESETS[0];
    for (formality, metal) in [(Formality::Formal, MetalPreference::Gold),
                               (Formality::Smart, MetalPreference::Silver)] {
        plan(&mut fh, navy, formality, metal)?;
    }

    writeln!(fh, "</body>\n\
                  </html>")?;
    Ok(())
}
