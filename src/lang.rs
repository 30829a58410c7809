//! Static localization table. Lookups fall back to English, and then to the
//! key itself, so a missing translation never panics and is easy to spot in
//! the rendered page.

pub struct Language {
    pub code: &'static str,
    pub name: &'static str,
    pub flag: &'static str,
}

pub static LANGUAGES: [Language; 5] = [
    Language {
        code: "en",
        name: "English",
        flag: "🇬🇧",
    },
    Language {
        code: "tr",
        name: "Türkçe",
        flag: "🇹🇷",
    },
    Language {
        code: "es",
        name: "Español",
        flag: "🇪🇸",
    },
    Language {
        code: "fr",
        name: "Français",
        flag: "🇫🇷",
    },
    Language {
        code: "de",
        name: "Deutsch",
        flag: "🇩🇪",
    },
];

pub const DEFAULT: &str = "en";

/// Returns the supported language for `code`, or `None`. Unknown codes are
/// the caller's cue to silently keep the current language.
pub fn by_code(code: &str) -> Option<&'static Language> {
    LANGUAGES.iter().find(|l| l.code == code)
}

/// Translate `key` into `lang`. Falls back to English, then to the key.
pub fn t<'a>(lang: &str, key: &'a str) -> &'a str {
    lookup(lang, key)
        .or_else(|| lookup(DEFAULT, key))
        .unwrap_or(key)
}

fn lookup(lang: &str, key: &str) -> Option<&'static str> {
    match lang {
        "en" => en(key),
        "tr" => tr(key),
        "es" => es(key),
        "fr" => fr(key),
        "de" => de(key),
        _ => None,
    }
}

fn en(key: &str) -> Option<&'static str> {
    Some(match key {
        "appName" => "NoteMaster",
        "notes" => "Notes",
        "search" => "Search",
        "createNote" => "Create Note",
        "createFolder" => "Create Folder",
        "admin" => "Admin Panel",
        "allNotes" => "ALL NOTES",
        "pinned" => "PINNED",
        "folders" => "FOLDERS",
        "noNotes" => "No notes found",
        "createNotePrompt" => {
            "You don't have any notes yet. Create your first note!"
        }
        "noNotesInFolder" => "There are no notes in this folder yet.",
        "noteEditor" => "Note Editor",
        "noteNotFound" => "This note does not exist.",
        "pageNotFound" => "Page not found",
        "save" => "Save",
        "saved" => "Saved",
        "delete" => "Delete",
        "pin" => "Pin",
        "unpin" => "Unpin",
        "back" => "Back",
        "untitledNote" => "Untitled Note",
        "startWriting" => "Start writing...",
        "language" => "Language",
        "logout" => "Logout",
        "login" => "Login",
        "register" => "Register",
        "email" => "Email",
        "username" => "Username",
        "password" => "Password",
        "welcomeTagline" => "Your thoughts, organized.",
        "badCredentials" => "Wrong email or password",
        "registered" => "Registration successful! You can log in now.",
        _ => return None,
    })
}

fn tr(key: &str) -> Option<&'static str> {
    Some(match key {
        "appName" => "NotMaster",
        "notes" => "Notlar",
        "search" => "Ara",
        "createNote" => "Not Oluştur",
        "createFolder" => "Klasör Oluştur",
        "admin" => "Yönetici Paneli",
        "allNotes" => "TÜM NOTLAR",
        "pinned" => "SABİTLENMİŞ",
        "folders" => "KLASÖRLER",
        "noNotes" => "Not bulunamadı",
        "createNotePrompt" => {
            "Henüz hiç notunuz yok. İlk notunuzu oluşturun!"
        }
        "noNotesInFolder" => "Bu klasörde henüz not bulunmuyor.",
        "noteEditor" => "Not Düzenleyici",
        "noteNotFound" => "Böyle bir not yok.",
        "pageNotFound" => "Sayfa bulunamadı",
        "save" => "Kaydet",
        "saved" => "Kaydedildi",
        "delete" => "Sil",
        "pin" => "Sabitle",
        "unpin" => "Sabitlemeyi kaldır",
        "back" => "Geri",
        "untitledNote" => "Başlıksız Not",
        "startWriting" => "Yazmaya başlayın...",
        "language" => "Dil",
        "logout" => "Çıkış Yap",
        "login" => "Giriş Yap",
        "register" => "Kayıt Ol",
        "email" => "E-posta",
        "username" => "Kullanıcı adı",
        "password" => "Şifre",
        "welcomeTagline" => "Düşünceleriniz, düzenli.",
        "badCredentials" => "E-posta veya şifre hatalı",
        "registered" => "Kayıt başarılı! Şimdi giriş yapabilirsiniz.",
        _ => return None,
    })
}

fn es(key: &str) -> Option<&'static str> {
    Some(match key {
        "appName" => "NoteMaster",
        "notes" => "Notas",
        "search" => "Buscar",
        "createNote" => "Crear Nota",
        "createFolder" => "Crear Carpeta",
        "admin" => "Panel de Administrador",
        "allNotes" => "TODAS LAS NOTAS",
        "pinned" => "FIJADAS",
        "folders" => "CARPETAS",
        "noNotes" => "No se encontraron notas",
        "createNotePrompt" => "¡Aún no tienes notas. Crea tu primera nota!",
        "noNotesInFolder" => "Aún no hay notas en esta carpeta.",
        "noteEditor" => "Editor de notas",
        "noteNotFound" => "Esta nota no existe.",
        "pageNotFound" => "Página no encontrada",
        "save" => "Guardar",
        "saved" => "Guardado",
        "delete" => "Eliminar",
        "pin" => "Fijar",
        "unpin" => "Desfijar",
        "back" => "Volver",
        "untitledNote" => "Nota sin título",
        "startWriting" => "Empieza a escribir...",
        "language" => "Idioma",
        "logout" => "Cerrar sesión",
        "login" => "Iniciar sesión",
        "register" => "Registrarse",
        "email" => "Correo electrónico",
        "username" => "Nombre de usuario",
        "password" => "Contraseña",
        "welcomeTagline" => "Tus ideas, organizadas.",
        "badCredentials" => "Correo o contraseña incorrectos",
        "registered" => "¡Registro exitoso! Ya puedes iniciar sesión.",
        _ => return None,
    })
}

fn fr(key: &str) -> Option<&'static str> {
    Some(match key {
        "appName" => "NoteMaster",
        "notes" => "Notes",
        "search" => "Rechercher",
        "createNote" => "Créer une note",
        "createFolder" => "Créer un dossier",
        "admin" => "Panneau d'administration",
        "allNotes" => "TOUTES LES NOTES",
        "pinned" => "ÉPINGLÉES",
        "folders" => "DOSSIERS",
        "noNotes" => "Aucune note trouvée",
        "createNotePrompt" => {
            "Vous n'avez pas encore de notes. Créez votre première note!"
        }
        "noNotesInFolder" => "Il n'y a pas encore de notes dans ce dossier.",
        "noteEditor" => "Éditeur de notes",
        "noteNotFound" => "Cette note n'existe pas.",
        "pageNotFound" => "Page introuvable",
        "save" => "Enregistrer",
        "saved" => "Enregistré",
        "delete" => "Supprimer",
        "pin" => "Épingler",
        "unpin" => "Désépingler",
        "back" => "Retour",
        "untitledNote" => "Note sans titre",
        "startWriting" => "Commencez à écrire...",
        "language" => "Langue",
        "logout" => "Déconnexion",
        "login" => "Connexion",
        "register" => "S'inscrire",
        "email" => "E-mail",
        "username" => "Nom d'utilisateur",
        "password" => "Mot de passe",
        "welcomeTagline" => "Vos idées, organisées.",
        "badCredentials" => "E-mail ou mot de passe incorrect",
        "registered" => "Inscription réussie! Vous pouvez vous connecter.",
        _ => return None,
    })
}

fn de(key: &str) -> Option<&'static str> {
    Some(match key {
        "appName" => "NoteMaster",
        "notes" => "Notizen",
        "search" => "Suchen",
        "createNote" => "Notiz erstellen",
        "createFolder" => "Ordner erstellen",
        "admin" => "Administrationsbereich",
        "allNotes" => "ALLE NOTIZEN",
        "pinned" => "ANGEHEFTET",
        "folders" => "ORDNER",
        "noNotes" => "Keine Notizen gefunden",
        "createNotePrompt" => {
            "Sie haben noch keine Notizen. Erstellen Sie Ihre erste Notiz!"
        }
        "noNotesInFolder" => {
            "Es befinden sich noch keine Notizen in diesem Ordner."
        }
        "noteEditor" => "Notizen-Editor",
        "noteNotFound" => "Diese Notiz existiert nicht.",
        "pageNotFound" => "Seite nicht gefunden",
        "save" => "Speichern",
        "saved" => "Gespeichert",
        "delete" => "Löschen",
        "pin" => "Anheften",
        "unpin" => "Lösen",
        "back" => "Zurück",
        "untitledNote" => "Unbenannte Notiz",
        "startWriting" => "Beginnen Sie zu schreiben...",
        "language" => "Sprache",
        "logout" => "Abmelden",
        "login" => "Anmelden",
        "register" => "Registrieren",
        "email" => "E-Mail",
        "username" => "Benutzername",
        "password" => "Passwort",
        "welcomeTagline" => "Ihre Gedanken, geordnet.",
        "badCredentials" => "E-Mail oder Passwort falsch",
        "registered" => "Registrierung erfolgreich! Sie können sich anmelden.",
        _ => return None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_translated_key() {
        assert_eq!(t("tr", "notes"), "Notlar");
        assert_eq!(t("de", "folders"), "ORDNER");
    }

    #[test]
    fn test_missing_key_falls_back_to_english() {
        // "saved" exists everywhere; fake a gap by asking an unknown lang
        assert_eq!(t("pt", "notes"), "Notes");
    }

    #[test]
    fn test_unknown_key_falls_back_to_itself() {
        assert_eq!(t("en", "definitelyNotAKey"), "definitelyNotAKey");
        assert_eq!(t("fr", "definitelyNotAKey"), "definitelyNotAKey");
    }

    #[test]
    fn test_by_code() {
        assert!(by_code("es").is_some());
        assert!(by_code("xx").is_none());
    }

    #[test]
    fn test_every_language_covers_every_english_key() {
        let keys = [
            "appName",
            "notes",
            "search",
            "createNote",
            "createFolder",
            "admin",
            "allNotes",
            "pinned",
            "folders",
            "noNotes",
            "createNotePrompt",
            "noNotesInFolder",
            "noteEditor",
            "noteNotFound",
            "pageNotFound",
            "save",
            "saved",
            "delete",
            "pin",
            "unpin",
            "back",
            "untitledNote",
            "startWriting",
            "language",
            "logout",
            "login",
            "register",
            "email",
            "username",
            "password",
            "welcomeTagline",
            "badCredentials",
            "registered",
        ];
        for lang in &LANGUAGES {
            for key in keys {
                assert!(
                    lookup(lang.code, key).is_some(),
                    "{} is missing {key}",
                    lang.code
                );
            }
        }
    }
}
