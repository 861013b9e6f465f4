// Static bundles for every supported locale.

use super::{FormLabels, Locale, TemplateBundle};

pub(super) static EN: TemplateBundle = TemplateBundle {
    locale: Locale::En,
    language_name: "English",
    title: "TalentScout Hiring Assistant",
    sidebar_title: "Candidate Details",
    form: FormLabels {
        full_name: "Full Name",
        email: "Email Address",
        phone: "Phone Number",
        experience: "Years of Experience",
        position: "Desired Position(s)",
        location: "Current Location",
        qualification: "Highest Qualification",
        college_name: "College/University Name",
        tech_stack: "Tech Stack (e.g., Python, Django, MySQL)",
        resume_upload: "Upload Resume (PDF/DOCX)",
        submit: "Submit",
    },
    chat_heading: "Chat with TalentScout Assistant",
    chat_input_label: "Your Message",
    greeting: "**Namaste {name}! 👋**\n\
        Welcome to TalentScout! How's everything going in **{location}**?\n\
        Your **{qualification}** from **{college_name}** sounds impressive! Let's get started. 😊",
    resume_extracted: "📄 **Resume Extracted Successfully!**",
    no_resume: "No resume uploaded or extracted. Proceeding with available details.",
    no_tech_stack: "No tech stack provided. Skipping technical questions.",
    no_position: "No desired position provided. Skipping role questions.",
    tech_heading: "Questions related to {skill}:",
    resume_heading: "Personalized Questions from Resume:",
    role_heading: "Interview Questions for the Position: {position}",
    deflection: "I appreciate you bringing that up, {name}! 😊\n\
        However, compensation, benefits, and related details are typically discussed after an offer is extended.\n\
        If you'd like more insights, feel free to connect with HR directly.\n\
        For now, let's focus on preparing you for the technical rounds. \
        I believe your {qualification} from {college_name} will definitely stand out!",
    farewell: "Dhanyavaad {name}! 🙏 Thank you for using TalentScout. \
        We wish you the best in your job search!",
    exit_hint: "Type 'exit' to end the conversation.",
};

pub(super) static HI: TemplateBundle = TemplateBundle {
    locale: Locale::Hi,
    language_name: "Hindi",
    title: "टैलेंटस्काउट भर्ती सहायक",
    sidebar_title: "उम्मीदवार का विवरण",
    form: FormLabels {
        full_name: "पूरा नाम",
        email: "ईमेल पता",
        phone: "फ़ोन नंबर",
        experience: "अनुभव के वर्ष",
        position: "इच्छित पद",
        location: "वर्तमान स्थान",
        qualification: "उच्चतम योग्यता",
        college_name: "कॉलेज/विश्वविद्यालय का नाम",
        tech_stack: "टेक स्टैक (जैसे Python, Django, MySQL)",
        resume_upload: "बायोडाटा अपलोड करें (PDF/DOCX)",
        submit: "जमा करें",
    },
    chat_heading: "टैलेंटस्काउट सहायक से बात करें",
    chat_input_label: "आपका संदेश",
    greeting: "**नमस्ते {name}! 👋**\n\
        टैलेंटस्काउट में आपका स्वागत है! **{location}** में सब कैसा चल रहा है?\n\
        **{college_name}** से आपकी **{qualification}** प्रभावशाली है! चलिए शुरू करते हैं। 😊",
    resume_extracted: "📄 **बायोडाटा सफलतापूर्वक पढ़ा गया!**",
    no_resume: "कोई बायोडाटा अपलोड या पढ़ा नहीं गया। उपलब्ध विवरण के साथ आगे बढ़ रहे हैं।",
    no_tech_stack: "कोई टेक स्टैक नहीं दिया गया। तकनीकी प्रश्न छोड़े जा रहे हैं।",
    no_position: "कोई इच्छित पद नहीं दिया गया। पद से जुड़े प्रश्न छोड़े जा रहे हैं।",
    tech_heading: "{skill} से संबंधित प्रश्न:",
    resume_heading: "बायोडाटा पर आधारित व्यक्तिगत प्रश्न:",
    role_heading: "पद के लिए साक्षात्कार प्रश्न: {position}",
    deflection: "यह विषय उठाने के लिए धन्यवाद, {name}! 😊\n\
        वेतन, लाभ और इससे जुड़ी बातें आमतौर पर ऑफ़र मिलने के बाद तय होती हैं।\n\
        अधिक जानकारी के लिए आप सीधे HR से संपर्क कर सकते हैं।\n\
        अभी हम तकनीकी दौर की तैयारी पर ध्यान दें। \
        मुझे विश्वास है कि {college_name} से आपकी {qualification} ज़रूर अलग दिखेगी!",
    farewell: "धन्यवाद {name}! 🙏 टैलेंटस्काउट का उपयोग करने के लिए शुक्रिया। \
        आपकी नौकरी की खोज के लिए शुभकामनाएँ!",
    exit_hint: "बातचीत समाप्त करने के लिए 'exit' लिखें।",
};

pub(super) static ES: TemplateBundle = TemplateBundle {
    locale: Locale::Es,
    language_name: "Spanish",
    title: "Asistente de Contratación TalentScout",
    sidebar_title: "Datos del Candidato",
    form: FormLabels {
        full_name: "Nombre completo",
        email: "Correo electrónico",
        phone: "Número de teléfono",
        experience: "Años de experiencia",
        position: "Puesto(s) deseado(s)",
        location: "Ubicación actual",
        qualification: "Titulación más alta",
        college_name: "Nombre de la universidad",
        tech_stack: "Tecnologías (p. ej., Python, Django, MySQL)",
        resume_upload: "Subir currículum (PDF/DOCX)",
        submit: "Enviar",
    },
    chat_heading: "Chatea con el asistente de TalentScout",
    chat_input_label: "Tu mensaje",
    greeting: "**¡Namaste {name}! 👋**\n\
        ¡Bienvenido a TalentScout! ¿Cómo va todo en **{location}**?\n\
        ¡Tu **{qualification}** de **{college_name}** es impresionante! Empecemos. 😊",
    resume_extracted: "📄 **¡Currículum extraído correctamente!**",
    no_resume: "No se subió ni se extrajo ningún currículum. Continuamos con los datos disponibles.",
    no_tech_stack: "No se indicaron tecnologías. Se omiten las preguntas técnicas.",
    no_position: "No se indicó el puesto deseado. Se omiten las preguntas del puesto.",
    tech_heading: "Preguntas sobre {skill}:",
    resume_heading: "Preguntas personalizadas a partir del currículum:",
    role_heading: "Preguntas de entrevista para el puesto: {position}",
    deflection: "¡Gracias por mencionarlo, {name}! 😊\n\
        Sin embargo, el salario, los beneficios y otros detalles similares suelen tratarse después de una oferta.\n\
        Si quieres más información, puedes contactar directamente con RR. HH.\n\
        Por ahora, centrémonos en prepararte para las rondas técnicas. \
        ¡Seguro que tu {qualification} de {college_name} destacará!",
    farewell: "¡Dhanyavaad {name}! 🙏 Gracias por usar TalentScout. \
        ¡Te deseamos mucho éxito en tu búsqueda de empleo!",
    exit_hint: "Escribe 'exit' para terminar la conversación.",
};

pub(super) static FR: TemplateBundle = TemplateBundle {
    locale: Locale::Fr,
    language_name: "French",
    title: "Assistant de recrutement TalentScout",
    sidebar_title: "Informations du candidat",
    form: FormLabels {
        full_name: "Nom complet",
        email: "Adresse e-mail",
        phone: "Numéro de téléphone",
        experience: "Années d'expérience",
        position: "Poste(s) souhaité(s)",
        location: "Lieu de résidence",
        qualification: "Diplôme le plus élevé",
        college_name: "Nom de l'établissement",
        tech_stack: "Technologies (ex. : Python, Django, MySQL)",
        resume_upload: "Téléverser le CV (PDF/DOCX)",
        submit: "Envoyer",
    },
    chat_heading: "Discutez avec l'assistant TalentScout",
    chat_input_label: "Votre message",
    greeting: "**Namaste {name} ! 👋**\n\
        Bienvenue chez TalentScout ! Comment ça se passe à **{location}** ?\n\
        Votre **{qualification}** de **{college_name}** est impressionnant ! Commençons. 😊",
    resume_extracted: "📄 **CV extrait avec succès !**",
    no_resume: "Aucun CV téléversé ou extrait. Nous continuons avec les informations disponibles.",
    no_tech_stack: "Aucune technologie indiquée. Questions techniques ignorées.",
    no_position: "Aucun poste souhaité indiqué. Questions sur le poste ignorées.",
    tech_heading: "Questions sur {skill} :",
    resume_heading: "Questions personnalisées à partir du CV :",
    role_heading: "Questions d'entretien pour le poste : {position}",
    deflection: "Merci d'avoir abordé ce sujet, {name} ! 😊\n\
        Cependant, la rémunération, les avantages et les détails associés sont généralement discutés après une offre.\n\
        Pour en savoir plus, n'hésitez pas à contacter directement les RH.\n\
        Pour l'instant, concentrons-nous sur la préparation des entretiens techniques. \
        Je suis sûr que votre {qualification} de {college_name} fera la différence !",
    farewell: "Dhanyavaad {name} ! 🙏 Merci d'avoir utilisé TalentScout. \
        Nous vous souhaitons le meilleur dans votre recherche d'emploi !",
    exit_hint: "Tapez 'exit' pour terminer la conversation.",
};

pub(super) static DE: TemplateBundle = TemplateBundle {
    locale: Locale::De,
    language_name: "German",
    title: "TalentScout Recruiting-Assistent",
    sidebar_title: "Angaben zum Kandidaten",
    form: FormLabels {
        full_name: "Vollständiger Name",
        email: "E-Mail-Adresse",
        phone: "Telefonnummer",
        experience: "Jahre Berufserfahrung",
        position: "Gewünschte Position(en)",
        location: "Aktueller Wohnort",
        qualification: "Höchster Abschluss",
        college_name: "Name der Hochschule",
        tech_stack: "Tech-Stack (z. B. Python, Django, MySQL)",
        resume_upload: "Lebenslauf hochladen (PDF/DOCX)",
        submit: "Absenden",
    },
    chat_heading: "Chatte mit dem TalentScout-Assistenten",
    chat_input_label: "Deine Nachricht",
    greeting: "**Namaste {name}! 👋**\n\
        Willkommen bei TalentScout! Wie läuft es in **{location}**?\n\
        Dein **{qualification}** von der **{college_name}** klingt beeindruckend! Legen wir los. 😊",
    resume_extracted: "📄 **Lebenslauf erfolgreich ausgelesen!**",
    no_resume: "Kein Lebenslauf hochgeladen oder ausgelesen. Wir fahren mit den vorhandenen Angaben fort.",
    no_tech_stack: "Kein Tech-Stack angegeben. Technische Fragen werden übersprungen.",
    no_position: "Keine gewünschte Position angegeben. Fragen zur Position werden übersprungen.",
    tech_heading: "Fragen zu {skill}:",
    resume_heading: "Persönliche Fragen zum Lebenslauf:",
    role_heading: "Interviewfragen für die Position: {position}",
    deflection: "Danke, dass du das ansprichst, {name}! 😊\n\
        Gehalt, Zusatzleistungen und ähnliche Details werden üblicherweise nach einem Angebot besprochen.\n\
        Für weitere Informationen wende dich gern direkt an die Personalabteilung.\n\
        Konzentrieren wir uns jetzt auf die Vorbereitung der technischen Runden. \
        Ich bin sicher, dein {qualification} von der {college_name} wird überzeugen!",
    farewell: "Dhanyavaad {name}! 🙏 Danke, dass du TalentScout genutzt hast. \
        Wir wünschen dir viel Erfolg bei der Jobsuche!",
    exit_hint: "Gib 'exit' ein, um das Gespräch zu beenden.",
};
