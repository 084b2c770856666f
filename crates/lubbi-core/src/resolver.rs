//! Rule-based chat resolver.
//!
//! A message is normalized (trimmed, lowercased) and tested against an ordered table of
//! regex rules; the first match answers. If none match, an ordered keyword table is scanned
//! for a substring hit. Otherwise the default help text is returned.
//!
//! Rule order is part of the contract. "temperatura atual" is answered by `sensors`, not
//! `live_data`, because `sensors` comes first.

use crate::error::Result;
use crate::knowledge::{bullet_list, numbered_list, KnowledgeBase};
use crate::sensors::{SensorReading, SensorSource};
use chrono::Local;
use regex::Regex;

/// Answer used when nothing matched or a responder failed.
pub const DEFAULT_RESPONSE: &str = "🤔 Interessante sua pergunta! Como assistente especializado no LUBBI, posso te ajudar melhor com informações sobre:

• O que é o LUBBI e como funciona
• Nossos sensores e tecnologias
• Funcionalidades e capacidades
• Como conectar e usar o LUBBI
• Dados em tempo real
• Aplicações em saúde

Pode reformular sua pergunta ou me perguntar sobre algum desses tópicos?";

/// Appended to every keyword answer.
pub const FOLLOW_UP: &str = "Posso te ajudar com algo mais específico sobre o LUBBI?";

pub const GREETING: &str = "Olá! Sou o LUBBI Assistant, seu assistente virtual para informações sobre o robô de triagem inteligente. Como posso ajudá-lo hoje? Posso explicar sobre funcionalidades, sensores, ou tirar qualquer dúvida sobre o sistema LUBBI!";

const RULE_FALLBACK: &str = "fallback";

type Responder = fn(&KnowledgeBase, &dyn SensorSource) -> Result<String>;

/// (name, pattern over the normalized message, responder). Evaluated top to bottom.
const PATTERN_TABLE: &[(&str, &str, Responder)] = &[
    (
        "greeting",
        // Whole words only: "oi" must not fire inside "depois" or "foi".
        r"\b(?:olá|ola|oi|e aí|hey|hello|bom dia|boa tarde|boa noite)\b",
        greeting,
    ),
    (
        "about",
        r"(?:o que é|quem é|o que faz|explica|conta sobre|fale sobre).*lubb",
        about,
    ),
    (
        "features",
        r"funcionalidades|o que faz|capacidades|recursos|pode fazer",
        features,
    ),
    (
        "sensors",
        r"sensor|medir|medição|temperatura|batimento|coração|bpm",
        sensors,
    ),
    (
        "connection",
        r"conectar|conexão|conectado|ligar|conecte",
        connection,
    ),
    ("live_data", r"dados|atual|agora", live_data),
    (
        "advantages",
        r"vantagem|benefício|por que usar|diferencial|inovador",
        advantages,
    ),
    (
        "development",
        r"desenvolvido|quem fez|equipe|fiap|criador",
        development,
    ),
    ("help", r"ajuda|help|como funciona|manual", help),
    ("thanks", r"obrigado|obrigada|valeu|agradeço|thanks", thanks),
];

/// Literal substring and its one-line answer. Checked only when no pattern rule matched.
#[derive(Debug, Clone, Copy)]
pub struct KeywordRule {
    pub keyword: &'static str,
    pub response: &'static str,
}

const KEYWORD_RULES: &[KeywordRule] = &[
    KeywordRule {
        keyword: "triagem",
        response: "O LUBBI realiza triagem automática baseada nos sinais vitais e sintomas informados pelo paciente.",
    },
    KeywordRule {
        keyword: "hospital",
        response: "O LUBBI é perfeito para hospitais, reduzindo o tempo de espera e melhorando a eficiência da triagem.",
    },
    KeywordRule {
        keyword: "clínica",
        response: "Em clínicas, o LUBBI otimiza o fluxo de pacientes e fornece dados precisos para os médicos.",
    },
    KeywordRule {
        keyword: "tecnologia",
        response: "Usamos sensores de última geração e algoritmos de IA para máxima precisão.",
    },
    KeywordRule {
        keyword: "precisão",
        response: "Nossos sensores têm precisão de 98.7% e são calibrados regularmente.",
    },
    KeywordRule {
        keyword: "tempo",
        response: "O LUBBI reduz o tempo de triagem em até 70%, agilizando o atendimento.",
    },
    KeywordRule {
        keyword: "saúde",
        response: "Contribuímos para um sistema de saúde mais eficiente e acessível.",
    },
    KeywordRule {
        keyword: "emergência",
        response: "Em casos de emergência, o LUBBI prioriza pacientes com condições mais graves.",
    },
];

/// Compiled regex rule.
pub struct PatternRule {
    name: &'static str,
    matcher: Regex,
    respond: Responder,
}

impl PatternRule {
    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn matches(&self, normalized: &str) -> bool {
        self.matcher.is_match(normalized)
    }
}

/// Answer plus the rule that produced it (`fallback` when nothing matched).
#[derive(Debug, Clone, PartialEq)]
pub struct Resolution {
    pub rule: &'static str,
    pub text: String,
}

impl Resolution {
    fn fallback() -> Self {
        Self {
            rule: RULE_FALLBACK,
            text: DEFAULT_RESPONSE.to_string(),
        }
    }

    pub fn is_fallback(&self) -> bool {
        self.rule == RULE_FALLBACK
    }
}

pub struct Resolver {
    knowledge: KnowledgeBase,
    rules: Vec<PatternRule>,
    keywords: &'static [KeywordRule],
}

impl Resolver {
    /// Compiles the rule table over the LUBBI knowledge base.
    pub fn new() -> Result<Self> {
        Self::with_knowledge(KnowledgeBase::lubbi())
    }

    pub fn with_knowledge(knowledge: KnowledgeBase) -> Result<Self> {
        let rules = PATTERN_TABLE
            .iter()
            .map(|&(name, pattern, respond)| -> Result<PatternRule> {
                Ok(PatternRule {
                    name,
                    matcher: Regex::new(pattern)?,
                    respond,
                })
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(Self {
            knowledge,
            rules,
            keywords: KEYWORD_RULES,
        })
    }

    /// Rule names in evaluation order.
    pub fn rule_names(&self) -> Vec<&'static str> {
        self.rules.iter().map(PatternRule::name).collect()
    }

    pub fn keywords(&self) -> &[KeywordRule] {
        self.keywords
    }

    /// Text-only answer for `message`.
    pub fn respond(&self, message: &str, sensors: &dyn SensorSource) -> String {
        self.resolve(message, sensors).text
    }

    pub fn resolve(&self, message: &str, sensors: &dyn SensorSource) -> Resolution {
        let normalized = message.trim().to_lowercase();

        if let Some(rule) = self.rules.iter().find(|r| r.matches(&normalized)) {
            return match (rule.respond)(&self.knowledge, sensors) {
                Ok(text) => Resolution {
                    rule: rule.name,
                    text,
                },
                Err(e) => {
                    tracing::warn!(
                        target: "lubbi::chat",
                        rule = rule.name,
                        error = %e,
                        "Responder failed, answering with default text"
                    );
                    Resolution::fallback()
                }
            };
        }

        if let Some(hit) = self
            .keywords
            .iter()
            .find(|k| normalized.contains(k.keyword))
        {
            return Resolution {
                rule: hit.keyword,
                text: format!("{}\n\n{}", hit.response, FOLLOW_UP),
            };
        }

        Resolution::fallback()
    }
}

fn greeting(_kb: &KnowledgeBase, _sensors: &dyn SensorSource) -> Result<String> {
    Ok(GREETING.to_string())
}

fn about(kb: &KnowledgeBase, _sensors: &dyn SensorSource) -> Result<String> {
    Ok(format!(
        "🤖 **LUBBI - Robô de Triagem Inteligente**

{}

**Missão:** {}

**Tecnologia:** {}

**Principais Funcionalidades:**
{}

O que gostaria de saber mais especificamente?",
        kb.about.description,
        kb.about.mission,
        kb.about.technology,
        bullet_list(kb.features, "•"),
    ))
}

fn features(kb: &KnowledgeBase, _sensors: &dyn SensorSource) -> Result<String> {
    Ok(format!(
        "🛠️ **Funcionalidades do LUBBI:**

{}

**Vantagens:**
{}

Qual funcionalidade te interessa mais?",
        numbered_list(kb.features),
        bullet_list(kb.advantages, "✓"),
    ))
}

fn sensors(kb: &KnowledgeBase, _sensors: &dyn SensorSource) -> Result<String> {
    Ok(format!(
        "🔬 **Sensores do LUBBI:**

**🌡️ Sensor de Temperatura:**
{}

**💓 Sensor Cardíaco:**
{}

Ambos os sensores fornecem dados em tempo real com alta precisão!",
        kb.sensors.temperature, kb.sensors.cardiac,
    ))
}

fn connection(_kb: &KnowledgeBase, _sensors: &dyn SensorSource) -> Result<String> {
    Ok("🔌 **Como conectar com o LUBBI:**

Para conectar com o robô LUBBI:

1. **Certifique-se que o LUBBI está ligado** e na mesma rede WiFi
2. **Clique no botão \"Conectar ao LUBBI\"** na seção de Monitoramento
3. **Aguarde a conexão** - o sistema tentará se conectar automaticamente
4. **Verifique os dados** - temperatura e batimentos cardíacos serão exibidos

Problemas de conexão? Verifique se o LUBBI está ligado e acessível na rede."
        .to_string())
}

fn live_data(_kb: &KnowledgeBase, sensors: &dyn SensorSource) -> Result<String> {
    let reading = sensors.snapshot()?;
    Ok(render_live_data(&reading))
}

fn render_live_data(reading: &SensorReading) -> String {
    let temperature = reading
        .temperature
        .map(|t| format!("{}°C", t))
        .unwrap_or_else(|| "--".to_string());
    let heart_rate = reading
        .heart_rate
        .map(|b| format!("{} BPM", b))
        .unwrap_or_else(|| "--".to_string());
    let footer = match reading.last_update {
        Some(at) => format!(
            "Última atualização: {}",
            at.with_timezone(&Local).format("%d/%m/%Y, %H:%M:%S")
        ),
        None => "Aguardando dados dos sensores...".to_string(),
    };

    format!(
        "📊 **Dados Atuais dos Sensores:**

🌡️ Temperatura: {}
💓 Frequência Cardíaca: {}

{}",
        temperature, heart_rate, footer
    )
}

fn advantages(kb: &KnowledgeBase, _sensors: &dyn SensorSource) -> Result<String> {
    Ok(format!(
        "⭐ **Por que escolher o LUBBI?**

{}

**Aplicações:**
{}",
        bullet_list(kb.advantages, "🎯"),
        bullet_list(kb.applications, "🏥"),
    ))
}

fn development(kb: &KnowledgeBase, _sensors: &dyn SensorSource) -> Result<String> {
    Ok(format!(
        "👨‍💻 **Sobre o Desenvolvimento:**

{}

**Características Técnicas:**
• Plataforma: ESP32 com TFT Touch
• Sensores: MLX90614 (temperatura) + MAX30105 (cardíaco)
• Comunicação: WiFi + HTTP/REST
• Interface: TFT Touchscreen 3.5\"
• Alimentação: Bateria LiPo + Carregamento wireless

A equipe é composta por especialistas em medicina, engenharia e IA!",
        kb.development,
    ))
}

fn help(_kb: &KnowledgeBase, _sensors: &dyn SensorSource) -> Result<String> {
    Ok("🆘 **Como posso ajudar?**

Posso explicar sobre:

🤖 **O que é o LUBBI** - Conceito e missão
🛠️ **Funcionalidades** - O que o robô pode fazer
🔬 **Sensores** - Tecnologias de medição
📊 **Dados em Tempo Real** - Leituras atuais
🔌 **Conexão** - Como conectar com o LUBBI
⭐ **Vantagens** - Benefícios do sistema
👨‍💻 **Desenvolvimento** - Sobre a equipe e tecnologia

O que gostaria de saber?"
        .to_string())
}

fn thanks(_kb: &KnowledgeBase, _sensors: &dyn SensorSource) -> Result<String> {
    Ok("😊 De nada! Fico feliz em ajudar. Se tiver mais alguma dúvida sobre o LUBBI, estou aqui!

Que tal conhecer mais sobre nossos sensores ou como conectar com o LUBBI?"
        .to_string())
}
