// src/noyau/jetons.rs

use super::erreur::ErreurEval;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Tok {
    Num(f64),

    Plus,
    Minus,
    Star,
    Slash,

    LPar,
    RPar,
}

/// Tokenize une chaîne en jetons.
/// Supporte:
/// - nombres décimaux (ex: 12, 1.5, .5, 5.)
/// - opérateurs + - * /
/// - parenthèses ( )
/// - espaces (ignorés)
///
/// Tout le reste est refusé : pas d’identifiant, pas de fonction, pas d’exposant.
pub fn tokenize(s: &str) -> Result<Vec<Tok>, ErreurEval> {
    let mut out = Vec::new();
    let chars: Vec<char> = s.chars().collect();
    let mut i: usize = 0;

    while i < chars.len() {
        let c = chars[i];

        if c.is_whitespace() {
            i += 1;
            continue;
        }

        let simple = match c {
            '(' => Some(Tok::LPar),
            ')' => Some(Tok::RPar),
            '+' => Some(Tok::Plus),
            '-' => Some(Tok::Minus),
            '*' => Some(Tok::Star),
            '/' => Some(Tok::Slash),
            _ => None,
        };
        if let Some(t) = simple {
            out.push(t);
            i += 1;
            continue;
        }

        // Nombre : [0-9]* ( '.' [0-9]* )?  avec au moins un chiffre
        if c.is_ascii_digit() || c == '.' {
            let start = i;
            let mut point = false;
            while i < chars.len() && (chars[i].is_ascii_digit() || chars[i] == '.') {
                if chars[i] == '.' {
                    if point {
                        return Err(ErreurEval::syntaxe("nombre avec deux points décimaux"));
                    }
                    point = true;
                }
                i += 1;
            }

            let lit: String = chars[start..i].iter().collect();
            if lit == "." {
                return Err(ErreurEval::syntaxe("point décimal isolé"));
            }

            // Rust accepte "5." et ".5" comme f64
            let v: f64 = lit
                .parse()
                .map_err(|_| ErreurEval::syntaxe(format!("nombre invalide: {lit}")))?;
            out.push(Tok::Num(v));
            continue;
        }

        return Err(ErreurEval::syntaxe(format!("caractère inattendu: '{c}'")));
    }

    Ok(out)
}

/// Format utilitaire (logs) : liste de jetons en texte.
pub fn format_tokens(tokens: &[Tok]) -> String {
    let mut out = Vec::new();
    for t in tokens {
        let s = match t {
            Tok::Num(v) => format!("{v}"),

            Tok::Plus => "+".to_string(),
            Tok::Minus => "-".to_string(),
            Tok::Star => "*".to_string(),
            Tok::Slash => "/".to_string(),

            Tok::LPar => "(".to_string(),
            Tok::RPar => ")".to_string(),
        };
        out.push(s);
    }
    out.join(" ")
}
