// SPDX-FileCopyrightText: 2026 apstyle contributors
// SPDX-License-Identifier: MIT
//! The built-in special-term table.
//!
//! Maps a lowercased word to its one true casing. A hit here bypasses the
//! generic capitalization rules entirely, so acronyms like "API" and
//! mixed-case brands like "iPhone" always come out exactly as listed.

/// Default special terms, keyed by lowercased word.
pub(super) static DEFAULT_SPECIAL_TERMS: &[(&str, &str)] = &[
    // Tech products with internal capitalization
    ("ipad", "iPad"),
    ("iphone", "iPhone"),
    ("ipod", "iPod"),
    ("imac", "iMac"),
    ("ios", "iOS"),
    ("macos", "macOS"),
    ("watchos", "watchOS"),
    ("tvos", "tvOS"),
    ("airpods", "AirPods"),
    ("github", "GitHub"),
    ("gitlab", "GitLab"),
    ("bitbucket", "BitBucket"),
    ("linkedin", "LinkedIn"),
    ("youtube", "YouTube"),
    ("wordpress", "WordPress"),
    ("woocommerce", "WooCommerce"),
    ("paypal", "PayPal"),
    ("hashicorp", "HashiCorp"),
    ("ibm", "IBM"),
    ("aws", "AWS"),
    ("whatsapp", "WhatsApp"),
    // Programming terms with specific capitalization
    ("javascript", "JavaScript"),
    ("typescript", "TypeScript"),
    ("nodejs", "Node.js"),
    ("reactjs", "React.js"),
    ("vuejs", "Vue.js"),
    ("angularjs", "Angular.js"),
    ("jquery", "jQuery"),
    ("nextjs", "Next.js"),
    ("nuxtjs", "Nuxt.js"),
    ("expressjs", "Express.js"),
    ("nestjs", "Nest.js"),
    ("graphql", "GraphQL"),
    ("postgresql", "PostgreSQL"),
    ("mongodb", "MongoDB"),
    ("mysql", "MySQL"),
    ("mariadb", "MariaDB"),
    ("elasticsearch", "Elasticsearch"),
    ("circleci", "CircleCI"),
    ("travisci", "TravisCI"),
    ("eslint", "ESLint"),
    ("ocaml", "OCaml"),
    ("hlint", "HLint"),
    // Acronyms and technical terms
    ("api", "API"),
    ("apis", "APIs"),
    ("url", "URL"),
    ("urls", "URLs"),
    ("uri", "URI"),
    ("ui", "UI"),
    ("ux", "UX"),
    ("cli", "CLI"),
    ("ci", "CI"),
    ("cd", "CD"),
    ("cicd", "CI/CD"),
    ("pr", "PR"),
    ("saas", "SaaS"),
    ("paas", "PaaS"),
    ("iaas", "IaaS"),
    ("html", "HTML"),
    ("css", "CSS"),
    ("scss", "SCSS"),
    ("sass", "Sass"),
    ("php", "PHP"),
    ("json", "JSON"),
    ("yaml", "YAML"),
    ("xml", "XML"),
    ("csv", "CSV"),
    ("sql", "SQL"),
    ("nosql", "NoSQL"),
    ("http", "HTTP"),
    ("https", "HTTPS"),
    ("ftp", "FTP"),
    ("sftp", "SFTP"),
    ("ssh", "SSH"),
    ("ssl", "SSL"),
    ("tls", "TLS"),
    ("jwt", "JWT"),
    ("oauth", "OAuth"),
    ("saml", "SAML"),
    ("cors", "CORS"),
    ("cdn", "CDN"),
    ("dns", "DNS"),
    ("ip", "IP"),
    ("tcp", "TCP"),
    ("udp", "UDP"),
    ("vpn", "VPN"),
    ("lan", "LAN"),
    ("wan", "WAN"),
    ("seo", "SEO"),
    ("sem", "SEM"),
    ("cta", "CTA"),
    ("roi", "ROI"),
    ("kpi", "KPI"),
    ("crm", "CRM"),
    ("cms", "CMS"),
    ("erp", "ERP"),
    ("hr", "HR"),
    ("ai", "AI"),
    ("ml", "ML"),
    ("nlp", "NLP"),
    ("ar", "AR"),
    ("vr", "VR"),
    ("iot", "IoT"),
    ("sdk", "SDK"),
    ("ide", "IDE"),
    ("vscode", "VS Code"),
    ("pdf", "PDF"),
    ("jpeg", "JPEG"),
    ("jpg", "JPG"),
    ("png", "PNG"),
    ("gif", "GIF"),
    ("svg", "SVG"),
    ("webp", "WebP"),
    ("mp3", "MP3"),
    ("mp4", "MP4"),
    ("wav", "WAV"),
    ("avi", "AVI"),
    // Geographic and organizational acronyms
    ("usa", "USA"),
    ("uk", "UK"),
    ("eu", "EU"),
    ("un", "UN"),
    ("nato", "NATO"),
    ("nasa", "NASA"),
    ("fbi", "FBI"),
    ("cia", "CIA"),
    ("cdc", "CDC"),
    ("who", "WHO"),
    // Academic degrees
    ("phd", "PhD"),
    ("ba", "BA"),
    ("bs", "BS"),
    ("bsc", "BSc"),
    ("ma", "MA"),
    ("msc", "MSc"),
    ("md", "MD"),
    ("jd", "JD"),
    ("mba", "MBA"),
    // Terms with stylized casing
    ("ecommerce", "eCommerce"),
    ("ebook", "eBook"),
    ("esports", "eSports"),
    ("wifi", "WiFi"),
    ("nft", "NFT"),
    ("defi", "DeFi"),
];
