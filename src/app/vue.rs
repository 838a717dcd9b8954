// src/app/vue.rs
//
// Vue (UI egui) — natif + web
// ---------------------------
// Objectifs :
// - Un champ d’affichage (sortie seulement, aligné à droite) sur toute la largeur
// - Pavé 4 colonnes : 7 8 9 / | 4 5 6 * | 1 2 3 - | 0 . = + | C
// - Un clic => une Touche => AppCalc::touche (aucune closure par bouton)
//
// Note :
// - Pas de clavier : le champ n’est jamais éditable.

use eframe::egui;

use super::etat::AppCalc;
use super::theme;
use crate::noyau::{Operateur, Touche};

const PAVE: [&[Touche]; 5] = [
    &[
        Touche::Chiffre(7),
        Touche::Chiffre(8),
        Touche::Chiffre(9),
        Touche::Operateur(Operateur::Divise),
    ],
    &[
        Touche::Chiffre(4),
        Touche::Chiffre(5),
        Touche::Chiffre(6),
        Touche::Operateur(Operateur::Fois),
    ],
    &[
        Touche::Chiffre(1),
        Touche::Chiffre(2),
        Touche::Chiffre(3),
        Touche::Operateur(Operateur::Moins),
    ],
    &[
        Touche::Chiffre(0),
        Touche::Point,
        Touche::Egal,
        Touche::Operateur(Operateur::Plus),
    ],
    &[Touche::Efface],
];

const COLONNES: usize = 4;

impl AppCalc {
    /// UI principale : à appeler depuis eframe::App::update(...)
    pub fn ui(&mut self, ui: &mut egui::Ui) {
        ui.spacing_mut().item_spacing = egui::vec2(theme::ESPACE, theme::ESPACE);

        self.ui_affichage(ui);
        ui.add_space(theme::ESPACE);
        self.ui_pave(ui);
    }

    fn ui_affichage(&self, ui: &mut egui::Ui) {
        egui::Frame::new()
            .fill(theme::FOND_AFFICHAGE)
            .inner_margin(egui::Margin::same(5))
            .show(ui, |ui| {
                // &str : TextBuffer en lecture seule
                let mut texte = self.affichage.as_str();
                ui.add(
                    egui::TextEdit::singleline(&mut texte)
                        .id_salt("affichage")
                        .frame(false)
                        .font(egui::FontId::proportional(theme::TAILLE_AFFICHAGE))
                        .text_color(theme::TEXTE_CLAIR)
                        .horizontal_align(egui::Align::RIGHT)
                        .desired_width(f32::INFINITY),
                );
            });
    }

    fn ui_pave(&mut self, ui: &mut egui::Ui) {
        let colonnes = COLONNES as f32;
        let rangees = PAVE.len() as f32;

        // Les touches se partagent toute la place restante
        let largeur = ((ui.available_width() - (colonnes - 1.0) * theme::ESPACE) / colonnes).max(1.0);
        let hauteur = ((ui.available_height() - (rangees - 1.0) * theme::ESPACE) / rangees).max(1.0);

        let mut pressee = None;

        egui::Grid::new("pave_calc")
            .num_columns(COLONNES)
            .spacing([theme::ESPACE, theme::ESPACE])
            .show(ui, |ui| {
                for rangee in PAVE {
                    for &touche in rangee {
                        if Self::bouton(ui, touche, [largeur, hauteur]) {
                            pressee = Some(touche);
                        }
                    }
                    ui.end_row();
                }
            });

        if let Some(touche) = pressee {
            self.touche(touche);
        }
    }

    fn bouton(ui: &mut egui::Ui, touche: Touche, taille: [f32; 2]) -> bool {
        let style = theme::style_touche(touche);

        let mut libelle = egui::RichText::new(touche.libelle().to_string())
            .size(theme::TAILLE_TOUCHE)
            .color(style.texte);
        if style.gras {
            libelle = libelle.strong();
        }

        ui.scope(|ui| {
            let w = &mut ui.visuals_mut().widgets;
            w.inactive.weak_bg_fill = style.fond;
            w.hovered.weak_bg_fill = style.fond;
            w.active.weak_bg_fill = style.fond_actif;
            for v in [&mut w.inactive, &mut w.hovered, &mut w.active] {
                v.bg_stroke = egui::Stroke::NONE;
            }

            ui.add_sized(taille, egui::Button::new(libelle))
                .on_hover_cursor(egui::CursorIcon::PointingHand)
                .clicked()
        })
        .inner
    }
}
