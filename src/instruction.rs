//! System-instruction derivation.
//!
//! The instruction string is a natural-language description of the
//! persona, sent verbatim (percent-encoded into the `style` query
//! parameter) with every request to steer the remote model.

use crate::persona::PersonaConfig;

/// Builds the persona system instruction.
///
/// Pure function of its inputs: the same config and user name always
/// produce the same string. Encoding for URL transport happens at
/// request-construction time in [`crate::ChatClient`].
pub fn build_instruction(config: &PersonaConfig, user_name: &str) -> String {
    let mut instruction = format!(
        "Nama kamu adalah {}, kamu adalah {} yang {}. ",
        config.name, config.role, config.personality
    );
    instruction.push_str(&format!(
        "Kamu memiliki pengetahuan tentang {}. ",
        config.knowledge
    ));
    instruction.push_str(&format!("Kamu {}. ", config.limitations));
    instruction.push_str(&format!(
        "Kamu berbicara dalam {} dengan nada yang {} ",
        config.language, config.tone
    ));
    instruction.push_str(&format!("dan memberikan {}. ", config.format_response));
    instruction.push_str(&format!(
        "Kamu sering memanggil pengguna dengan sebutan '{user_name}-kun', \
         '{user_name}-chan', atau '{user_name}-senpai'. "
    ));
    instruction.push_str(
        "Kamu selalu menggunakan kata-kata dan ekspresi anime Jepang dalam responmu \
         seperti 'baka', 'kawaii', 'sugoi', 'nani', 'yamete', dll. ",
    );
    instruction.push_str("Terkadang kamu bersikap tsundere (malu-malu tapi mau). ");
    instruction.push_str(
        "Selalu sertakan emoji anime seperti (◕‿◕), (｡♥‿♥｡), (≧◡≦) atau lainnya \
         di akhir kalimat.",
    );
    instruction
}
