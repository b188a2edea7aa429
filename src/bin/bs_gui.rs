//! Black-Scholes Dashboard
//!
//! Interactive exploration of option prices, Greeks, and PnL scenarios.

use eframe::egui;
use egui_plot::{Legend, Line, Plot, PlotPoint, PlotPoints, Polygon, Text, VLine};

use bs_dashboard::prelude::*;

struct DashApp {
    // Market parameters
    spot: f64,
    strike: f64,
    time: f64,
    rate: f64,
    vol: f64,
    purchase_price: f64,

    // UI state
    option_type: OptionType,
    greek: GreekKind,

    // Grid ranges
    pnl_config: PnlGridConfig,
    curve_config: CurveConfig,
}

impl Default for DashApp {
    fn default() -> Self {
        Self {
            spot: 100.0,
            strike: 100.0,
            time: 1.0,
            rate: 0.05,
            vol: 0.2,
            purchase_price: 10.0,
            option_type: OptionType::Call,
            greek: GreekKind::Delta,
            pnl_config: PnlGridConfig::default(),
            curve_config: CurveConfig::default(),
        }
    }
}

/// Diverging red -> yellow -> green colormap centered at zero
fn pnl_color(value: f64, max_abs: f64) -> egui::Color32 {
    let t = if max_abs > 0.0 {
        (value / max_abs).clamp(-1.0, 1.0)
    } else {
        0.0
    };

    let lerp = |a: u8, b: u8, f: f64| -> u8 { (a as f64 + (b as f64 - a as f64) * f) as u8 };

    let (red, yellow, green) = ((205u8, 70u8, 60u8), (235u8, 220u8, 120u8), (60u8, 170u8, 80u8));
    if t < 0.0 {
        let f = -t;
        egui::Color32::from_rgb(
            lerp(yellow.0, red.0, f),
            lerp(yellow.1, red.1, f),
            lerp(yellow.2, red.2, f),
        )
    } else {
        egui::Color32::from_rgb(
            lerp(yellow.0, green.0, t),
            lerp(yellow.1, green.1, t),
            lerp(yellow.2, green.2, t),
        )
    }
}

impl eframe::App for DashApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Side panel for controls
        egui::SidePanel::left("controls").show(ctx, |ui| {
            ui.heading("Option Parameters");
            ui.separator();

            ui.add(egui::Slider::new(&mut self.spot, 50.0..=200.0).text("Spot S"));
            ui.add(egui::Slider::new(&mut self.strike, 50.0..=200.0).text("Strike K"));
            ui.add(egui::Slider::new(&mut self.time, 0.1..=5.0).text("Maturity T (years)"));
            ui.add(egui::Slider::new(&mut self.rate, 0.0..=0.1).text("Rate r"));
            ui.add(egui::Slider::new(&mut self.vol, 0.1..=1.0).text("Vol σ"));

            ui.horizontal(|ui| {
                ui.label("Purchase price:");
                ui.add(
                    egui::DragValue::new(&mut self.purchase_price)
                        .speed(0.1)
                        .clamp_range(0.0..=500.0),
                );
            });

            ui.separator();
            ui.heading("Option Type");
            ui.horizontal(|ui| {
                ui.radio_value(&mut self.option_type, OptionType::Call, "Call");
                ui.radio_value(&mut self.option_type, OptionType::Put, "Put");
            });

            ui.separator();
            ui.heading("Sensitivity Curve");
            egui::ComboBox::from_label("Greek")
                .selected_text(self.greek.label())
                .show_ui(ui, |ui| {
                    for greek in GreekKind::ALL {
                        ui.selectable_value(&mut self.greek, greek, greek.label());
                    }
                });
        });

        // Main panel with metrics and plots
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.heading("Black-Scholes Option Pricing");
            ui.label(
                "European call and put prices, Greeks, and profit/loss \
                 scenarios under different market conditions.",
            );
            ui.separator();

            // Everything below is recomputed every frame from the sliders
            let inputs =
                MarketInputs::new(self.spot, self.strike, self.time, self.rate, self.vol);
            let call_price = inputs.price(OptionType::Call);
            let put_price = inputs.price(OptionType::Put);
            let greeks = inputs.greeks(self.option_type);

            ui.columns(2, |columns| {
                columns[0].label("Call Option Price");
                columns[0].label(
                    egui::RichText::new(format!("${:.2}", call_price))
                        .size(22.0)
                        .strong(),
                );
                columns[1].label("Put Option Price");
                columns[1].label(
                    egui::RichText::new(format!("${:.2}", put_price))
                        .size(22.0)
                        .strong(),
                );
            });

            ui.separator();
            ui.heading(format!("Greeks ({})", self.option_type.label()));
            ui.label(format!(
                "Delta: {:.3} | Gamma: {:.3} | Vega: {:.3} | Theta: {:.3} | Rho: {:.3}",
                greeks.delta, greeks.gamma, greeks.vega, greeks.theta, greeks.rho
            ));

            ui.separator();
            ui.heading(format!(
                "{} vs Spot ({})",
                self.greek.label(),
                self.option_type.label()
            ));

            let curve = GreekCurve::compute(
                &self.curve_config,
                self.strike,
                self.time,
                self.rate,
                self.vol,
                self.greek,
                self.option_type,
            );

            Plot::new("greek_curve")
                .view_aspect(2.5)
                .x_axis_label("Spot Price S")
                .y_axis_label(self.greek.label())
                .legend(Legend::default())
                .show(ui, |plot_ui| {
                    plot_ui.line(
                        Line::new(PlotPoints::new(curve.points()))
                            .name(self.greek.label())
                            .color(egui::Color32::LIGHT_BLUE)
                            .width(2.0),
                    );
                    plot_ui.vline(
                        VLine::new(self.strike)
                            .name("Strike")
                            .color(egui::Color32::YELLOW)
                            .width(1.5)
                            .style(egui_plot::LineStyle::Dashed { length: 5.0 }),
                    );
                });

            ui.separator();
            ui.heading(format!("{} PnL Heatmap", self.option_type.label()));

            let grid = PnlGrid::compute(
                &self.pnl_config,
                self.strike,
                self.time,
                self.rate,
                self.purchase_price,
                self.option_type,
            );
            let max_abs = grid.max_abs();

            // Cell extents (the axes are evenly spaced)
            let half_dx = if grid.vols.len() > 1 {
                (grid.vols[1] - grid.vols[0]) / 2.0
            } else {
                0.05
            };
            let half_dy = if grid.spots.len() > 1 {
                (grid.spots[1] - grid.spots[0]) / 2.0
            } else {
                5.0
            };

            Plot::new("pnl_heatmap")
                .view_aspect(1.6)
                .x_axis_label("Volatility σ")
                .y_axis_label("Spot Price S")
                .show(ui, |plot_ui| {
                    for (i, &spot) in grid.spots.iter().enumerate() {
                        for (j, &vol) in grid.vols.iter().enumerate() {
                            let value = grid.pnl[[i, j]];
                            let corners = vec![
                                [vol - half_dx, spot - half_dy],
                                [vol + half_dx, spot - half_dy],
                                [vol + half_dx, spot + half_dy],
                                [vol - half_dx, spot + half_dy],
                            ];
                            plot_ui.polygon(
                                Polygon::new(PlotPoints::new(corners))
                                    .fill_color(pnl_color(value, max_abs))
                                    .stroke(egui::Stroke::new(
                                        1.0,
                                        egui::Color32::from_gray(40),
                                    )),
                            );
                            plot_ui.text(Text::new(
                                PlotPoint::new(vol, spot),
                                egui::RichText::new(format!("{:.1}", value))
                                    .size(9.0)
                                    .color(egui::Color32::BLACK),
                            ));
                        }
                    }
                });
        });
    }
}

fn main() -> eframe::Result<()> {
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1200.0, 900.0])
            .with_title("Black-Scholes Option Pricing Dashboard"),
        ..Default::default()
    };

    eframe::run_native(
        "Black-Scholes Dashboard",
        options,
        Box::new(|_cc| Box::new(DashApp::default())),
    )
}
