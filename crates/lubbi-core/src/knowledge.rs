//! Static knowledge base about the LUBBI robot. Built once, read-only afterwards.

/// Identity section: what the robot is, why it exists, what it runs on.
#[derive(Debug, Clone, Copy)]
pub struct About {
    pub description: &'static str,
    pub mission: &'static str,
    pub technology: &'static str,
}

#[derive(Debug, Clone, Copy)]
pub struct SensorSpecs {
    pub temperature: &'static str,
    pub cardiac: &'static str,
}

/// Topic-keyed text the chat resolver assembles answers from.
#[derive(Debug, Clone, Copy)]
pub struct KnowledgeBase {
    pub about: About,
    pub features: &'static [&'static str],
    pub sensors: SensorSpecs,
    pub advantages: &'static [&'static str],
    pub development: &'static str,
    pub applications: &'static [&'static str],
}

impl KnowledgeBase {
    pub fn lubbi() -> Self {
        Self {
            about: About {
                description: "LUBBI é um Robô de Triagem Inteligente desenvolvido para revolucionar o atendimento médico. Ele combina sensores avançados com inteligência artificial para fornecer diagnósticos rápidos e precisos.",
                mission: "Nossa missão é democratizar o acesso à triagem médica de qualidade, reduzindo tempos de espera e melhorando a eficiência em hospitais e clínicas.",
                technology: "Utilizamos sensores MLX90614 para temperatura e MAX30105 para frequência cardíaca, além de algoritmos de IA para análise em tempo real.",
            },
            features: &[
                "Medição de temperatura corporal sem contato",
                "Monitoramento de frequência cardíaca (BPM)",
                "Triagem automática baseada em sintomas",
                "Interface touchscreen intuitiva",
                "Navegação autônoma em ambientes hospitalares",
                "Integração com sistemas de saúde",
                "Relatórios em PDF automáticos",
            ],
            sensors: SensorSpecs {
                temperature: "Sensor infravermelho MLX90614 - Precisão de ±0.1°C - Medição sem contato",
                cardiac: "Sensor MAX30105 - Monitoramento contínuo - Detecção de arritmias",
            },
            advantages: &[
                "Redução de 70% no tempo de triagem",
                "Precisão de 98.7% nos diagnósticos",
                "Atendimento 24/7",
                "Interface multilingue",
                "Relatórios detalhados em tempo real",
            ],
            development: "Desenvolvido por uma equipe multidisciplinar da FIAP com especialistas em medicina, engenharia e inteligência artificial.",
            applications: &[
                "Hospitais e pronto-socorros",
                "Clínicas médicas",
                "Unidades básicas de saúde",
                "Eventos de grande porte",
                "Empresas e corporações",
            ],
        }
    }
}

/// Renders `items` one per line, each prefixed with `marker` and a space.
pub fn bullet_list(items: &[&str], marker: &str) -> String {
    items
        .iter()
        .map(|item| format!("{} {}", marker, item))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Renders `items` as `1. a`, `2. b`, ...
pub fn numbered_list(items: &[&str]) -> String {
    items
        .iter()
        .enumerate()
        .map(|(i, item)| format!("{}. {}", i + 1, item))
        .collect::<Vec<_>>()
        .join("\n")
}
