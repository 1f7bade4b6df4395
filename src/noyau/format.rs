// src/noyau/format.rs
//
// Texte d’un résultat numérique.
// Contrat : la sortie est toujours relisible par tokenize() (pas d’exposant,
// pas de "inf"/"NaN"), puisque ANS la réinjecte dans l’expression.

/// f64 fini -> texte.
/// - entier : pas de ".0" (2+2 => "4")
/// - -0 : "0"
/// - sinon : écriture positionnelle la plus courte qui relit la même valeur
pub fn format_nombre(v: f64) -> String {
    if v == 0.0 {
        return "0".to_string();
    }

    // Display de f64 : jamais d’exposant, jamais de ".0" final.
    format!("{v}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::noyau::jetons::{tokenize, Tok};
    use pretty_assertions::assert_eq;

    #[test]
    fn entiers_sans_decimale() {
        assert_eq!(format_nombre(4.0), "4");
        assert_eq!(format_nombre(-12.0), "-12");
        assert_eq!(format_nombre(2.0 / 1.0), "2");
    }

    #[test]
    fn zero_negatif() {
        assert_eq!(format_nombre(-0.0), "0");
    }

    #[test]
    fn decimaux() {
        assert_eq!(format_nombre(0.5), "0.5");
        assert_eq!(format_nombre(0.1 + 0.2), "0.30000000000000004");
        assert_eq!(format_nombre(1.0 / 3.0), "0.3333333333333333");
    }

    #[test]
    fn grands_et_petits_relisibles() {
        for v in [1e16, 1e-7, 123456789012345680000.0, 2.5e-12] {
            let txt = format_nombre(v);
            assert!(!txt.contains('e'), "txt={txt}");
            assert_eq!(tokenize(&txt).unwrap(), vec![Tok::Num(v)], "txt={txt}");
        }
    }
}
