//! Static partner records.

use super::{Collaboration, Partner, Stat};

pub(super) static PARTNERS: &[Partner] = &[
    Partner {
        id: "air-algerie",
        name: "Air Algérie",
        logo: "assets/Air_Algérie_logo.png",
        description: "National airline partnership",
        industry: "Aviation & Transportation",
        founded: "1953",
        headquarters: "Algiers, Algeria",
        about: "Air Algérie is the national airline of Algeria, with its head office in the Immeuble El-Djazair in Algiers. It operates scheduled international services to destinations in Europe, Africa, Asia, and the Middle East, as well as domestic flights within Algeria.",
        collaboration: Collaboration {
            start_date: "2020",
            services: &[
                "Digital queue management for check-in counters",
                "Real-time flight status integration",
                "Customer flow optimization",
                "Multi-terminal coordination system",
            ],
            impact: "Reduced average wait times by 45% and improved customer satisfaction scores by 38%",
        },
        stats: &[
            Stat {
                label: "Daily Passengers",
                value: "5,000+",
            },
            Stat {
                label: "Counters Managed",
                value: "120+",
            },
            Stat {
                label: "Airports",
                value: "15",
            },
        ],
        website: Some("https://www.airalgerie.dz"),
        gallery: &[
            "https://images.unsplash.com/photo-1436491865332-7a61a109cc05?w=800&q=80",
            "https://images.unsplash.com/photo-1464037866556-6812c9d1c72e?w=800&q=80",
            "https://images.unsplash.com/photo-1583968791244-bf170ca7e285?w=800&q=80",
            "https://images.unsplash.com/photo-1556388158-158f89457711?w=800&q=80",
            "https://images.unsplash.com/photo-1474302770737-173ee21bab63?w=800&q=80",
        ],
    },
    Partner {
        id: "bank-of-algeria",
        name: "Bank of Algeria",
        logo: "assets/Bank_of_Algeria.png",
        description: "Banking sector collaboration",
        industry: "Banking & Finance",
        founded: "1962",
        headquarters: "Algiers, Algeria",
        about: "The Bank of Algeria is the central bank of Algeria. It is responsible for issuing the national currency, managing monetary policy, and regulating the banking sector to ensure financial stability across the nation.",
        collaboration: Collaboration {
            start_date: "2019",
            services: &[
                "Branch queue management system",
                "Priority service routing",
                "Customer appointment scheduling",
                "Multi-service ticket management",
            ],
            impact: "Enhanced branch efficiency by 50% and reduced customer complaints by 62%",
        },
        stats: &[
            Stat {
                label: "Branches Connected",
                value: "200+",
            },
            Stat {
                label: "Daily Transactions",
                value: "15,000+",
            },
            Stat {
                label: "Service Types",
                value: "25+",
            },
        ],
        website: None,
        gallery: &[
            "https://images.unsplash.com/photo-1501167786227-4cba60f6d58f?w=800&q=80",
            "https://images.unsplash.com/photo-1554224311-beee4ece8c35?w=800&q=80",
            "https://images.unsplash.com/photo-1541354329998-f4d9a9f9297f?w=800&q=80",
            "https://images.unsplash.com/photo-1450101499163-c8848c66ca85?w=800&q=80",
            "https://images.unsplash.com/photo-1563013544-824ae1b704d3?w=800&q=80",
        ],
    },
    Partner {
        id: "djezzy",
        name: "Djezzy",
        logo: "assets/Djezzy_Logo.png",
        description: "Telecommunications partner",
        industry: "Telecommunications",
        founded: "2001",
        headquarters: "Algiers, Algeria",
        about: "Djezzy is one of Algeria's leading mobile telecommunications operators, providing innovative mobile services to millions of customers across the country with cutting-edge 4G technology and comprehensive network coverage.",
        collaboration: Collaboration {
            start_date: "2021",
            services: &[
                "Retail store queue management",
                "Customer service desk optimization",
                "Digital check-in system",
                "Service quality analytics",
            ],
            impact: "Improved store throughput by 55% and increased customer retention by 28%",
        },
        stats: &[
            Stat {
                label: "Retail Locations",
                value: "300+",
            },
            Stat {
                label: "Daily Visitors",
                value: "25,000+",
            },
            Stat {
                label: "Service Points",
                value: "800+",
            },
        ],
        website: Some("https://www.djezzy.dz"),
        gallery: &[
            "https://images.unsplash.com/photo-1556742044-3c52d6e88c62?w=800&q=80",
            "https://images.unsplash.com/photo-1423666639041-f56000c27a9a?w=800&q=80",
            "https://images.unsplash.com/photo-1551434678-e076c223a692?w=800&q=80",
            "https://images.unsplash.com/photo-1504384308090-c894fdcc538d?w=800&q=80",
            "https://images.unsplash.com/photo-1522071820081-009f0129c71c?w=800&q=80",
        ],
    },
    Partner {
        id: "sonatrach",
        name: "Sonatrach",
        logo: "assets/Flag_of_Sonatrach.png",
        description: "Energy sector partnership",
        industry: "Oil & Gas",
        founded: "1963",
        headquarters: "Algiers, Algeria",
        about: "Sonatrach is the national oil and gas company of Algeria, ranking among Africa's largest corporations. It handles the exploration, production, transportation, and marketing of hydrocarbons and their derivatives.",
        collaboration: Collaboration {
            start_date: "2018",
            services: &[
                "Administrative office queue management",
                "Visitor registration system",
                "Security clearance integration",
                "Multi-facility coordination",
            ],
            impact: "Streamlined administrative processes by 40% and enhanced security protocols",
        },
        stats: &[
            Stat {
                label: "Facilities Managed",
                value: "50+",
            },
            Stat {
                label: "Daily Visitors",
                value: "3,000+",
            },
            Stat {
                label: "Service Centers",
                value: "35",
            },
        ],
        website: Some("https://www.sonatrach.com"),
        gallery: &[
            "https://images.unsplash.com/photo-1564514167111-cb3f8a79e90c?w=800&q=80",
            "https://images.unsplash.com/photo-1497366216548-37526070297c?w=800&q=80",
            "https://images.unsplash.com/photo-1497366811353-6870744d04b2?w=800&q=80",
            "https://images.unsplash.com/photo-1581094794329-c8112a89af12?w=800&q=80",
            "https://images.unsplash.com/photo-1586864387634-afe5ad3f6a44?w=800&q=80",
        ],
    },
    Partner {
        id: "mobilis",
        name: "Mobilis",
        logo: "assets/Logo_Mobilis.png",
        description: "Mobile network operator",
        industry: "Telecommunications",
        founded: "2003",
        headquarters: "Algiers, Algeria",
        about: "Mobilis is Algeria's leading mobile telecommunications operator, providing comprehensive mobile and internet services nationwide with the most extensive network coverage in the country.",
        collaboration: Collaboration {
            start_date: "2020",
            services: &[
                "Customer service center management",
                "Virtual queuing system",
                "SMS notification integration",
                "Multi-channel service coordination",
            ],
            impact: "Reduced wait times by 52% and improved first-contact resolution by 35%",
        },
        stats: &[
            Stat {
                label: "Service Centers",
                value: "400+",
            },
            Stat {
                label: "Daily Customers",
                value: "30,000+",
            },
            Stat {
                label: "Support Channels",
                value: "12",
            },
        ],
        website: Some("https://www.mobilis.dz"),
        gallery: &[
            "https://images.unsplash.com/photo-1573164713988-8665fc963095?w=800&q=80",
            "https://images.unsplash.com/photo-1551434678-e076c223a692?w=800&q=80",
            "https://images.unsplash.com/photo-1556761175-4b46a572b786?w=800&q=80",
            "https://images.unsplash.com/photo-1519389950473-47ba0277781c?w=800&q=80",
            "https://images.unsplash.com/photo-1542744173-8e7e53415bb0?w=800&q=80",
        ],
    },
    Partner {
        id: "ooredoo",
        name: "Ooredoo",
        logo: "assets/Ooredoo_logo.svg",
        description: "Telecommunications partner",
        industry: "Telecommunications",
        founded: "2004",
        headquarters: "Algiers, Algeria",
        about: "Ooredoo Algeria is a major telecommunications provider offering mobile, internet, and digital services with a focus on innovation and customer experience across the Algerian market.",
        collaboration: Collaboration {
            start_date: "2021",
            services: &[
                "Smart store queue management",
                "Digital customer journey mapping",
                "Service quality monitoring",
                "Real-time analytics dashboard",
            ],
            impact: "Enhanced customer experience scores by 42% and optimized staff allocation",
        },
        stats: &[
            Stat {
                label: "Stores",
                value: "250+",
            },
            Stat {
                label: "Daily Customers",
                value: "20,000+",
            },
            Stat {
                label: "Service Types",
                value: "30+",
            },
        ],
        website: Some("https://www.ooredoo.dz"),
        gallery: &[
            "https://images.unsplash.com/photo-1560179707-f14e90ef3623?w=800&q=80",
            "https://images.unsplash.com/photo-1556155092-8707de31f9c4?w=800&q=80",
            "https://images.unsplash.com/photo-1553877522-43269d4ea984?w=800&q=80",
            "https://images.unsplash.com/photo-1454165804606-c3d57bc86b40?w=800&q=80",
            "https://images.unsplash.com/photo-1552664730-d307ca884978?w=800&q=80",
        ],
    },
    Partner {
        id: "sonelgaz",
        name: "Sonelgaz",
        logo: "assets/Sonlgaz.png",
        description: "Electricity and gas provider",
        industry: "Energy & Utilities",
        founded: "1969",
        headquarters: "Algiers, Algeria",
        about: "Sonelgaz is Algeria's state-owned electricity and natural gas distribution company, providing essential energy services to millions of households and businesses nationwide.",
        collaboration: Collaboration {
            start_date: "2019",
            services: &[
                "Customer service center optimization",
                "Bill payment queue management",
                "Service request routing",
                "Regional office coordination",
            ],
            impact: "Improved service delivery by 48% and reduced operational costs by 25%",
        },
        stats: &[
            Stat {
                label: "Service Centers",
                value: "180+",
            },
            Stat {
                label: "Daily Visitors",
                value: "12,000+",
            },
            Stat {
                label: "Coverage Area",
                value: "48 Regions",
            },
        ],
        website: Some("https://www.sonelgaz.dz"),
        gallery: &[
            "https://images.unsplash.com/photo-1473341304170-971dccb5ac1e?w=800&q=80",
            "https://images.unsplash.com/photo-1509391111737-a847f17ad50d?w=800&q=80",
            "https://images.unsplash.com/photo-1466611653911-95081537e5b7?w=800&q=80",
            "https://images.unsplash.com/photo-1532601224476-15c79f2f7a51?w=800&q=80",
            "https://images.unsplash.com/photo-1624397640148-949b1732bb0a?w=800&q=80",
        ],
    },
    Partner {
        id: "cnas",
        name: "CNAS",
        logo: "assets/cnas.png",
        description: "Social security partner",
        industry: "Healthcare & Social Security",
        founded: "1992",
        headquarters: "Algiers, Algeria",
        about: "CNAS (Caisse Nationale des Assurances Sociales) is Algeria's national social security fund, managing health insurance and social benefits for employed workers and their families.",
        collaboration: Collaboration {
            start_date: "2018",
            services: &[
                "Healthcare facility queue management",
                "Patient appointment system",
                "Multi-service coordination",
                "Priority care routing",
            ],
            impact: "Reduced patient wait times by 60% and improved service accessibility by 45%",
        },
        stats: &[
            Stat {
                label: "Facilities",
                value: "500+",
            },
            Stat {
                label: "Daily Beneficiaries",
                value: "40,000+",
            },
            Stat {
                label: "Service Points",
                value: "1,200+",
            },
        ],
        website: None,
        gallery: &[
            "https://images.unsplash.com/photo-1538108149393-fbbd81895907?w=800&q=80",
            "https://images.unsplash.com/photo-1519494026892-80bbd2d6fd0d?w=800&q=80",
            "https://images.unsplash.com/photo-1576091160399-112ba8d25d1d?w=800&q=80",
            "https://images.unsplash.com/photo-1504813184591-01572f98c85f?w=800&q=80",
            "https://images.unsplash.com/photo-1571772996211-2f02c9727629?w=800&q=80",
        ],
    },
];
