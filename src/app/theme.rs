// src/app/theme.rs
//
// Couleurs et tailles (constantes) — thème sombre statique.

use eframe::egui::{self, Color32};

use crate::noyau::Touche;

/* ------------------------ Fenêtre + affichage ------------------------ */

pub const FOND_FENETRE: Color32 = Color32::from_rgb(0x33, 0x33, 0x33);
pub const FOND_AFFICHAGE: Color32 = Color32::from_rgb(0x55, 0x55, 0x55);
pub const TEXTE_CLAIR: Color32 = Color32::WHITE;

pub const TAILLE_AFFICHAGE: f32 = 24.0;
pub const TAILLE_TOUCHE: f32 = 18.0;

/// Marge autour du contenu, et espace entre touches.
pub const MARGE: i8 = 10;
pub const ESPACE: f32 = 5.0;

/* ------------------------ Touches ------------------------ */

#[derive(Clone, Copy, Debug)]
pub struct StyleTouche {
    pub fond: Color32,
    pub fond_actif: Color32,
    pub texte: Color32,
    pub gras: bool,
}

pub fn style_touche(touche: Touche) -> StyleTouche {
    match touche {
        Touche::Egal => StyleTouche {
            fond: Color32::from_rgb(0xFF, 0x95, 0x00),
            fond_actif: Color32::from_rgb(0xE0, 0x85, 0x00),
            texte: TEXTE_CLAIR,
            gras: true,
        },
        Touche::Operateur(_) => StyleTouche {
            fond: Color32::from_rgb(0xF0, 0xF0, 0xF0),
            fond_actif: Color32::from_rgb(0xE0, 0xE0, 0xE0),
            texte: FOND_FENETRE,
            gras: false,
        },
        Touche::Efface => StyleTouche {
            fond: Color32::from_rgb(0xFF, 0x3B, 0x30),
            fond_actif: Color32::from_rgb(0xE0, 0x30, 0x28),
            texte: TEXTE_CLAIR,
            gras: false,
        },
        Touche::Chiffre(_) | Touche::Point => StyleTouche {
            fond: Color32::from_rgb(0x88, 0x88, 0x88),
            fond_actif: Color32::from_rgb(0x77, 0x77, 0x77),
            texte: TEXTE_CLAIR,
            gras: false,
        },
    }
}

/// Visuels sombres + fond de fenêtre (avant la première frame).
pub fn installer_theme(ctx: &egui::Context) {
    let mut visuals = egui::Visuals::dark();
    visuals.panel_fill = FOND_FENETRE;
    visuals.window_fill = FOND_FENETRE;
    ctx.set_visuals(visuals);
}
