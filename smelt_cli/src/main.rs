//! # Smeltcalc CLI Application
//!
//! Terminal interface for furnace and ladle design sessions. The CLI is
//! the host layer: it gathers and validates inputs, drives the engine in
//! `smelt_core`, and formats the results.

use std::io::{self, BufRead, Write};

use smelt_core::calculations::ladle::{self, LadleInput};
use smelt_core::furnace::{DesignField, FurnaceDesign, FurnaceInputs};
use smelt_core::materials::SmeltingProduct;

fn prompt_f64(prompt: &str, default: f64) -> f64 {
    print!("{}", prompt);
    if io::stdout().flush().is_err() {
        return default;
    }

    let mut input = String::new();
    if io::stdin().lock().read_line(&mut input).is_err() {
        return default;
    }

    input.trim().parse().unwrap_or(default)
}

fn prompt_product(default: SmeltingProduct) -> SmeltingProduct {
    println!("Smelting products:");
    for (i, product) in SmeltingProduct::ALL.iter().enumerate() {
        println!("  {}. {}", i + 1, product.display_name());
    }
    let choice = prompt_f64("Select product [1]: ", 1.0) as usize;
    SmeltingProduct::ALL
        .get(choice.saturating_sub(1))
        .copied()
        .unwrap_or(default)
}

fn main() {
    println!("Smeltcalc CLI - Furnace & Ladle Design Calculator");
    println!("=================================================");
    println!();

    // === Furnace sizing session ===
    let product = prompt_product(SmeltingProduct::SiliconManganese);
    let capacity_mva = prompt_f64("Transformer capacity (MVA) [33.0]: ", 33.0);
    let primary_kv = prompt_f64("Primary voltage (kV) [35.0]: ", 35.0);
    let lining_mm = prompt_f64("Average lining thickness (mm) [1200]: ", 1200.0);

    let inputs = FurnaceInputs {
        capacity_mva,
        primary_kv,
        lining_mm,
    };
    if let Err(e) = inputs.validate() {
        eprintln!("Error: {}", e);
        return;
    }

    let coeffs = product.coefficients();
    let mut design = FurnaceDesign::new(inputs, coeffs);

    print_design(&design, product);

    // Offer the as-built electrode override; everything downstream follows
    let de_default = design.rounded().de_mm;
    let de = prompt_f64(
        &format!("Adjust electrode diameter De (mm) [{:.0}]: ", de_default),
        de_default,
    );
    if de != de_default {
        design.apply_override(DesignField::ElectrodeDiameter, de);
        println!();
        println!("Recomputed from De = {:.0} mm:", de);
        print_design(&design, product);
    }

    // === Ladle sizing ===
    println!();
    println!("--- Ladle sizing ---");
    let density_default = coeffs.melt_density_t_m3.unwrap_or(7.0);
    let ladle_input = LadleInput {
        label: "CLI-Ladle".to_string(),
        target_volume_m3: prompt_f64("Target melt volume (m³) [4.5]: ", 4.5),
        density_t_m3: prompt_f64(
            &format!("Melt density (t/m³) [{:.1}]: ", density_default),
            density_default,
        ),
        freeboard_mm: prompt_f64("Freeboard (mm) [300]: ", 300.0),
        wall_mm: prompt_f64("Wall thickness (mm) [160]: ", 160.0),
        bottom_mm: prompt_f64("Bottom thickness (mm) [230]: ", 230.0),
        taper_deg: prompt_f64("Taper angle (deg) [5]: ", 5.0),
        diameter_height_ratio: prompt_f64("Diameter/height ratio [1.05]: ", 1.05),
    };

    match ladle::calculate(&ladle_input) {
        Ok(result) => {
            println!();
            println!("═══════════════════════════════════════");
            println!("  LADLE GEOMETRY");
            println!("═══════════════════════════════════════");
            println!("  Total height:     {:.3} m", result.height_m);
            println!("  Top OD:           {:.3} m", result.top_od_m);
            println!("  Bottom OD:        {:.3} m", result.bottom_od_m);
            println!("  Cavity height:    {:.3} m", result.cavity_height_m);
            println!("  Cavity volume:    {:.3} m³", result.cavity_volume_m3);
            println!("  Melt load:        {:.1} t", result.load_mass_t);
            println!("═══════════════════════════════════════");

            println!();
            println!("JSON Output (for host/API use):");
            if let Ok(json) = serde_json::to_string_pretty(&result) {
                println!("{}", json);
            }
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            if let Ok(json) = serde_json::to_string_pretty(&e) {
                eprintln!();
                eprintln!("Error JSON:");
                eprintln!("{}", json);
            }
        }
    }
}

fn print_design(design: &FurnaceDesign, product: SmeltingProduct) {
    let theo = design.theoretical();
    let rnd = design.rounded();

    println!();
    println!("═══════════════════════════════════════════════════");
    println!("  FURNACE DESIGN - {}", product.display_name());
    println!("═══════════════════════════════════════════════════");
    println!();
    println!("  Parameter                Theoretical    Rounded");
    println!("  ---------                -----------    -------");
    println!("  Primary current I1 (A)   {:>11.1}", theo.i1_a);
    println!("  Secondary U2 (V)         {:>11.1}    {:>7.0}", theo.u2_v, rnd.u2_v);
    println!("  Secondary I2 (A)         {:>11.0}    {:>7.0}", theo.i2_a, rnd.i2_a);
    println!("  Electrode De (mm)        {:>11.0}    {:>7.0}", theo.de_mm, rnd.de_mm);
    println!("  Pole circle Dc (mm)      {:>11.0}    {:>7.0}", theo.dc_mm, rnd.dc_mm);
    println!("  Hearth ID Di (mm)        {:>11.0}    {:>7.0}", theo.di_mm, rnd.di_mm);
    println!("  Hearth depth Hh (mm)     {:>11.0}    {:>7.0}", theo.hh_mm, rnd.hh_mm);
    println!("  Shell ID (mm)            {:>11.0}    {:>7.0}", theo.shell_id_mm, rnd.shell_id_mm);
    println!("  Shell height (mm)        {:>11.0}    {:>7.0}", theo.shell_h_mm, rnd.shell_h_mm);
    println!();

    if let Ok(json) = serde_json::to_string_pretty(rnd) {
        println!("JSON Output (rounded working set):");
        println!("{}", json);
    }
}
