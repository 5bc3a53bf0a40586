use anyhow::Context;
use colored::*;
use sortr_common::{config::Config, success};
use sortr_core::{Argument, Assessment, Category, Oversize, Package, input};

use crate::terminal::{colors, print};

pub fn classify(readings: &[String], cfg: &Config) -> anyhow::Result<()> {
    let readings: Vec<&str> = readings.iter().map(String::as_str).collect();
    let package: Package = input::package_from_raw(&readings).context("invalid package readings")?;
    let assessment: Assessment = package.assess();

    if cfg.quiet < 2 {
        print_details(&package, &assessment);
    }
    success!("Package sent to the {} stack", category_colored(assessment.category));

    // stdout carries only the token; everything else goes through the logger
    println!("{}", assessment.category);
    Ok(())
}

fn print_details(package: &Package, assessment: &Assessment) {
    print::set_key_width("oversized".len());

    for argument in Argument::ALL {
        let value: f64 = package.get(argument);
        let reading: String = if argument.is_dimension() {
            format!("{value} cm")
        } else {
            value.to_string()
        };
        print::aligned_line(argument.name(), reading);
    }
    print::aligned_line("volume", format!("{} cm³", package.volume()));

    let oversized: ColoredString = match assessment.oversized {
        Some(Oversize::Dimension(argument)) => format!("yes ({argument} too long)").color(colors::WARNING),
        Some(Oversize::Volume(_)) => "yes (too bulky)".color(colors::WARNING),
        None => "no".color(colors::OK),
    };
    print::aligned_line("oversized", oversized);

    let heavy: ColoredString = if assessment.heavy {
        "yes".color(colors::WARNING)
    } else {
        "no".color(colors::OK)
    };
    print::aligned_line("heavy", heavy);
}

fn category_colored(category: Category) -> ColoredString {
    let color = match category {
        Category::Standard => colors::OK,
        Category::Special => colors::WARNING,
        Category::Rejected => colors::DANGER,
    };
    category.as_str().color(color).bold()
}
