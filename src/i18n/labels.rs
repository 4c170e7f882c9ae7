//! Static UI copy in every supported language.

use vitrine_core::i18n::Language;

/// Look up `key`. `None` for unknown keys.
pub(super) fn lookup(key: &str, lang: Language) -> Option<&'static str> {
    let text = match key {
        // --- common ---
        "common.loading" => match lang {
            Language::Fr => "Chargement...",
            Language::Ar => "جارٍ التحميل...",
            Language::En => "Loading...",
        },
        "common.backToHome" => match lang {
            Language::Fr => "Retour à l'accueil",
            Language::Ar => "العودة إلى الصفحة الرئيسية",
            Language::En => "Back to home",
        },

        // --- hero ---
        "hero.title" => match lang {
            Language::Fr => "Des files d'attente intelligentes, des clients satisfaits",
            Language::Ar => "طوابير أذكى وعملاء أسعد",
            Language::En => "Smarter queues, happier customers",
        },
        "hero.subtitle" => match lang {
            Language::Fr => "Gestion digitale des files d'attente pour les banques, les télécoms, les services publics et les utilités.",
            Language::Ar => "إدارة رقمية للطوابير للبنوك والاتصالات والخدمات العامة.",
            Language::En => "Digital queue management for banks, telecoms, utilities and public services.",
        },
        "hero.cta" => match lang {
            Language::Fr => "Contactez-nous",
            Language::Ar => "تواصل معنا",
            Language::En => "Get in touch",
        },

        // --- privacy ---
        "privacy.title" => match lang {
            Language::Fr => "Politique de confidentialité",
            Language::Ar => "سياسة الخصوصية",
            Language::En => "Privacy Policy",
        },
        "privacy.subtitle" => match lang {
            Language::Fr => "Vos données sont protégées dès la conception.",
            Language::Ar => "بياناتك محمية منذ التصميم.",
            Language::En => "Your data is protected by design.",
        },
        "privacy.description" => match lang {
            Language::Fr => "Nous nous engageons à protéger vos informations personnelles et à être transparents sur leur utilisation.",
            Language::Ar => "نلتزم بحماية معلوماتك الشخصية والشفافية في كيفية استخدامها.",
            Language::En => "We are committed to protecting your personal information and being transparent about how we use it.",
        },
        "privacy.readMore" => match lang {
            Language::Fr => "Lire la politique complète",
            Language::Ar => "اقرأ السياسة كاملة",
            Language::En => "Read the full policy",
        },
        "privacy.dataProtection" => match lang {
            Language::Fr => "Protection des données",
            Language::Ar => "حماية البيانات",
            Language::En => "Data Protection",
        },
        "privacy.dataProtectionDesc" => match lang {
            Language::Fr => "Vos données personnelles ne sont collectées qu'en cas de besoin et stockées en toute sécurité.",
            Language::Ar => "تُجمع بياناتك الشخصية عند الضرورة فقط وتُخزَّن بأمان.",
            Language::En => "Your personal data is collected only when necessary and stored securely.",
        },
        "privacy.encryption" => match lang {
            Language::Fr => "Chiffrement",
            Language::Ar => "التشفير",
            Language::En => "Encryption",
        },
        "privacy.encryptionDesc" => match lang {
            Language::Fr => "Toutes les données sont chiffrées en transit et au repos.",
            Language::Ar => "جميع البيانات مشفرة أثناء النقل والتخزين.",
            Language::En => "All data is encrypted in transit and at rest.",
        },
        "privacy.transparency" => match lang {
            Language::Fr => "Transparence",
            Language::Ar => "الشفافية",
            Language::En => "Transparency",
        },
        "privacy.transparencyDesc" => match lang {
            Language::Fr => "Nous vous indiquons ce que nous collectons, pourquoi et pour combien de temps.",
            Language::Ar => "نخبرك بما نجمعه ولماذا ولأي مدة.",
            Language::En => "We tell you what we collect, why, and for how long.",
        },
        "privacy.compliance" => match lang {
            Language::Fr => "Conformité",
            Language::Ar => "الامتثال",
            Language::En => "Compliance",
        },
        "privacy.complianceDesc" => match lang {
            Language::Fr => "Nos pratiques respectent la réglementation applicable en matière de protection des données.",
            Language::Ar => "تتوافق ممارساتنا مع لوائح حماية البيانات المعمول بها.",
            Language::En => "Our practices follow applicable data protection regulations.",
        },

        // --- terms ---
        "terms.title" => match lang {
            Language::Fr => "Conditions d'utilisation",
            Language::Ar => "شروط الخدمة",
            Language::En => "Terms of Service",
        },
        "terms.subtitle" => match lang {
            Language::Fr => "Les règles qui encadrent l'utilisation de nos services.",
            Language::Ar => "القواعد التي تحكم استخدام خدماتنا.",
            Language::En => "The rules that govern the use of our services.",
        },
        "terms.description" => match lang {
            Language::Fr => "En utilisant nos services, vous acceptez ces conditions. Veuillez les lire attentivement pour comprendre vos droits et responsabilités.",
            Language::Ar => "باستخدام خدماتنا، فإنك توافق على هذه الشروط. يرجى قراءتها بعناية لفهم حقوقك ومسؤولياتك.",
            Language::En => "By using our services, you agree to these terms. Please read them carefully to understand your rights and responsibilities.",
        },
        "terms.readMore" => match lang {
            Language::Fr => "Lire les conditions complètes",
            Language::Ar => "اقرأ الشروط الكاملة",
            Language::En => "Read Full Terms",
        },
        "terms.continueReading" => match lang {
            Language::Fr => "Continuer la lecture",
            Language::Ar => "متابعة القراءة",
            Language::En => "Continue reading",
        },
        "terms.acceptance.title" => match lang {
            Language::Fr => "Acceptation des conditions",
            Language::Ar => "قبول الشروط",
            Language::En => "Acceptance of Terms",
        },
        "terms.acceptance.content" => match lang {
            Language::Fr => "En accédant à notre plateforme ou en l'utilisant, vous acceptez d'être lié par ces conditions ainsi que par les lois et règlements applicables.",
            Language::Ar => "بدخولك إلى منصتنا أو استخدامها فإنك توافق على الالتزام بهذه الشروط وبجميع القوانين واللوائح المعمول بها.",
            Language::En => "By accessing or using our platform you agree to be bound by these terms and by all applicable laws and regulations.",
        },
        "terms.userRights.title" => match lang {
            Language::Fr => "Droits des utilisateurs",
            Language::Ar => "حقوق المستخدم",
            Language::En => "User Rights",
        },
        "terms.userRights.content" => match lang {
            Language::Fr => "Vous pouvez accéder à vos informations personnelles, les corriger ou les supprimer à tout moment et vous restez propriétaire du contenu que vous soumettez.",
            Language::Ar => "يمكنك الوصول إلى معلوماتك الشخصية أو تصحيحها أو حذفها في أي وقت، وتبقى مالكًا للمحتوى الذي تقدمه.",
            Language::En => "You may access, correct or delete your personal information at any time and you keep ownership of the content you submit.",
        },
        "terms.limitations.title" => match lang {
            Language::Fr => "Limitations",
            Language::Ar => "القيود",
            Language::En => "Limitations",
        },
        "terms.limitations.content" => match lang {
            Language::Fr => "Nous ne sommes pas responsables des dommages indirects résultant de l'utilisation du service, dans la mesure permise par la loi.",
            Language::Ar => "لا نتحمل المسؤولية عن الأضرار غير المباشرة الناشئة عن استخدام الخدمة، في الحدود التي يسمح بها القانون.",
            Language::En => "We are not liable for indirect damages arising from the use of the service, to the extent permitted by law.",
        },

        // --- contact ---
        "contact.title" => match lang {
            Language::Fr => "Contactez-nous",
            Language::Ar => "اتصل بنا",
            Language::En => "Contact Us",
        },
        "contact.subtitle" => match lang {
            Language::Fr => "Nous serions ravis d'avoir de vos nouvelles.",
            Language::Ar => "يسعدنا أن نسمع منك.",
            Language::En => "We would love to hear from you.",
        },
        "contact.email" => match lang {
            Language::Fr => "E-mail",
            Language::Ar => "البريد الإلكتروني",
            Language::En => "Email",
        },
        "contact.phone" => match lang {
            Language::Fr => "Téléphone",
            Language::Ar => "الهاتف",
            Language::En => "Phone",
        },
        "contact.fax" => match lang {
            Language::Fr => "Fax",
            Language::Ar => "الفاكس",
            Language::En => "Fax",
        },
        "contact.location" => match lang {
            Language::Fr => "Adresse",
            Language::Ar => "العنوان",
            Language::En => "Location",
        },
        "contact.hours" => match lang {
            Language::Fr => "Horaires",
            Language::Ar => "ساعات العمل",
            Language::En => "Business hours",
        },
        "contact.getStartedDesc" => match lang {
            Language::Fr => "Prêt à transformer votre expérience client ? Envoyez-nous un message et notre équipe vous répondra.",
            Language::Ar => "هل أنت مستعد لتحويل تجربة عملائك؟ أرسل لنا رسالة وسيتواصل معك فريقنا.",
            Language::En => "Ready to transform your customer experience? Send us a message and our team will get back to you.",
        },
        "contact.formHint" => match lang {
            Language::Fr => "Envoyez un message avec : vitrine contact --name <nom> --email <email> --subject <objet> --message <message>",
            Language::Ar => "أرسل رسالة باستخدام: vitrine contact --name <الاسم> --email <البريد> --subject <الموضوع> --message <الرسالة>",
            Language::En => "Send a message with: vitrine contact --name <name> --email <email> --subject <subject> --message <message>",
        },
        "contact.sent" => match lang {
            Language::Fr => "Votre message a été envoyé. Merci !",
            Language::Ar => "تم إرسال رسالتك. شكرًا لك!",
            Language::En => "Your message has been sent. Thank you!",
        },

        // --- aboutPage ---
        "aboutPage.title" => match lang {
            Language::Fr => "À propos de nous",
            Language::Ar => "من نحن",
            Language::En => "About Us",
        },
        "aboutPage.mission" => match lang {
            Language::Fr => "Notre mission",
            Language::Ar => "مهمتنا",
            Language::En => "Our Mission",
        },
        "aboutPage.vision" => match lang {
            Language::Fr => "Notre vision",
            Language::Ar => "رؤيتنا",
            Language::En => "Our Vision",
        },
        "aboutPage.values" => match lang {
            Language::Fr => "Nos valeurs",
            Language::Ar => "قيمنا",
            Language::En => "Our Values",
        },
        "aboutPage.whoWeServe" => match lang {
            Language::Fr => "Qui nous servons",
            Language::Ar => "من نخدم",
            Language::En => "Who We Serve",
        },
        "aboutPage.whyChooseUs" => match lang {
            Language::Fr => "Pourquoi nous choisir",
            Language::Ar => "لماذا تختارنا",
            Language::En => "Why Choose Us",
        },
        "aboutPage.getInTouch" => match lang {
            Language::Fr => "Restons en contact",
            Language::Ar => "تواصل معنا",
            Language::En => "Get in Touch",
        },
        "aboutPage.getInTouchText" => match lang {
            Language::Fr => "Une question sur nos solutions ? Notre équipe est là pour vous aider.",
            Language::Ar => "هل لديك سؤال حول حلولنا؟ فريقنا هنا لمساعدتك.",
            Language::En => "Have a question about our solutions? Our team is here to help.",
        },
        "aboutPage.email" => match lang {
            Language::Fr => "E-mail : contact@vitrine.dz",
            Language::Ar => "البريد الإلكتروني: contact@vitrine.dz",
            Language::En => "Email: contact@vitrine.dz",
        },
        "aboutPage.phone" => match lang {
            Language::Fr => "Téléphone : +213 21 00 00 00",
            Language::Ar => "الهاتف: 00 00 00 21 213+",
            Language::En => "Phone: +213 21 00 00 00",
        },
        "aboutPage.address" => match lang {
            Language::Fr => "Adresse : Alger, Algérie",
            Language::Ar => "العنوان: الجزائر العاصمة، الجزائر",
            Language::En => "Address: Algiers, Algeria",
        },

        // --- partners ---
        "partners.title" => match lang {
            Language::Fr => "Nos partenaires",
            Language::Ar => "شركاؤنا",
            Language::En => "Our Partners",
        },
        "partners.subtitle" => match lang {
            Language::Fr => "La confiance des plus grandes organisations d'Algérie.",
            Language::Ar => "موثوق بنا من قبل كبرى المؤسسات في الجزائر.",
            Language::En => "Trusted by leading organizations across Algeria.",
        },

        // --- partner ---
        "partner.industry" => match lang {
            Language::Fr => "Secteur",
            Language::Ar => "القطاع",
            Language::En => "Industry",
        },
        "partner.founded" => match lang {
            Language::Fr => "Fondée en",
            Language::Ar => "تأسست",
            Language::En => "Founded",
        },
        "partner.headquarters" => match lang {
            Language::Fr => "Siège",
            Language::Ar => "المقر",
            Language::En => "Headquarters",
        },
        "partner.website" => match lang {
            Language::Fr => "Site web",
            Language::Ar => "الموقع الإلكتروني",
            Language::En => "Website",
        },
        "partner.about" => match lang {
            Language::Fr => "À propos",
            Language::Ar => "نبذة",
            Language::En => "About",
        },
        "partner.collaboration" => match lang {
            Language::Fr => "Notre collaboration",
            Language::Ar => "تعاوننا",
            Language::En => "Our Collaboration",
        },
        "partner.services" => match lang {
            Language::Fr => "Services",
            Language::Ar => "الخدمات",
            Language::En => "Services",
        },
        "partner.impact" => match lang {
            Language::Fr => "Impact",
            Language::Ar => "الأثر",
            Language::En => "Impact",
        },
        "partner.stats" => match lang {
            Language::Fr => "Chiffres clés",
            Language::Ar => "أرقام رئيسية",
            Language::En => "Key Figures",
        },
        "partner.gallery" => match lang {
            Language::Fr => "Galerie",
            Language::Ar => "معرض الصور",
            Language::En => "Gallery",
        },
        "partner.notFound" => match lang {
            Language::Fr => "Partenaire introuvable",
            Language::Ar => "الشريك غير موجود",
            Language::En => "Partner not found",
        },
        "partner.notFoundDesc" => match lang {
            Language::Fr => "Le partenaire que vous recherchez n'existe pas ou a été supprimé.",
            Language::Ar => "الشريك الذي تبحث عنه غير موجود أو تمت إزالته.",
            Language::En => "The partner you are looking for does not exist or has been removed.",
        },

        // --- notFound ---
        "notFound.title" => match lang {
            Language::Fr => "Page introuvable",
            Language::Ar => "الصفحة غير موجودة",
            Language::En => "Page not found",
        },
        "notFound.message" => match lang {
            Language::Fr => "Oups ! La page que vous recherchez n'existe pas.",
            Language::Ar => "عذرًا! الصفحة التي تبحث عنها غير موجودة.",
            Language::En => "Oops! The page you are looking for does not exist.",
        },
        // --- footer ---
        "nav.partnerships" => match lang {
            Language::Fr => "Partenariats",
            Language::Ar => "الشراكات",
            Language::En => "Partnerships",
        },
        "nav.aboutUs" => match lang {
            Language::Fr => "À propos",
            Language::Ar => "من نحن",
            Language::En => "About Us",
        },
        "nav.privacy" => match lang {
            Language::Fr => "Confidentialité",
            Language::Ar => "الخصوصية",
            Language::En => "Privacy",
        },
        "nav.contact" => match lang {
            Language::Fr => "Contact",
            Language::Ar => "اتصل بنا",
            Language::En => "Contact",
        },
        "footer.description" => match lang {
            Language::Fr => "Des solutions de gestion de files d'attente qui font gagner du temps à vos clients.",
            Language::Ar => "حلول لإدارة الطوابير توفر وقت عملائك.",
            Language::En => "Queue management solutions that save your customers time.",
        },
        "footer.company" => match lang {
            Language::Fr => "Entreprise",
            Language::Ar => "الشركة",
            Language::En => "Company",
        },
        "footer.contactUs" => match lang {
            Language::Fr => "Nous contacter",
            Language::Ar => "تواصل معنا",
            Language::En => "Contact Us",
        },
        "footer.followUs" => match lang {
            Language::Fr => "Suivez-nous",
            Language::Ar => "تابعنا",
            Language::En => "Follow Us",
        },
        "footer.website" => match lang {
            Language::Fr => "Site web",
            Language::Ar => "الموقع الإلكتروني",
            Language::En => "Website",
        },
        "footer.termsOfService" => match lang {
            Language::Fr => "Conditions d'utilisation",
            Language::Ar => "شروط الخدمة",
            Language::En => "Terms of Service",
        },
        "footer.copyright" => match lang {
            Language::Fr => "© 2025 Toorrii. Tous droits réservés.",
            Language::Ar => "© 2025 Toorrii. جميع الحقوق محفوظة.",
            Language::En => "© 2025 Toorrii. All rights reserved.",
        },
        _ => return None,
    };
    Some(text)
}
