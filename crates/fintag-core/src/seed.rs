//! Embedded seed dataset.
//!
//! The static, code-versioned base of labeled transaction descriptions.
//! Feedback rows are concatenated after these at assembly time, so
//! corrections can reinforce but never silently replace the seed.

use crate::types::TrainingExample;

const SEED: &[(&str, &str)] = &[
    // Alimentacao
    ("mc donalds lanche", "Alimentacao"),
    ("ifood pedido", "Alimentacao"),
    ("restaurante almoco", "Alimentacao"),
    ("padaria pao e cafe", "Alimentacao"),
    ("pizza delivery", "Alimentacao"),
    ("barzinho cerveja", "Alimentacao"),
    // Transporte
    ("uber viagem", "Transporte"),
    ("99 taxi corrida", "Transporte"),
    ("combustivel gasolina", "Transporte"),
    ("estacionamento shopping", "Transporte"),
    ("onibus bilhete", "Transporte"),
    ("metro passagem", "Transporte"),
    // Saude
    ("farmacia araujo", "Saude"),
    ("drogasil medicamentos", "Saude"),
    ("consulta medica", "Saude"),
    ("dentista clinica", "Saude"),
    ("laboratorio exames", "Saude"),
    // Mercado
    ("carrefour compras", "Mercado"),
    ("supermercado dia", "Mercado"),
    ("mercado pao de acucar", "Mercado"),
    ("hortifruti feira", "Mercado"),
    // Moradia
    ("aluguel apartamento", "Moradia"),
    ("condominio mensal", "Moradia"),
    ("iptu parcela", "Moradia"),
    // Contas
    ("conta de luz energia", "Contas"),
    ("conta de agua", "Contas"),
    ("conta de gas", "Contas"),
    ("internet fibra", "Contas"),
    ("telefone claro", "Contas"),
    // Lazer
    ("cinema ingresso", "Lazer"),
    ("spotify assinatura", "Lazer"),
    ("netflix assinatura", "Lazer"),
    ("show ingresso", "Lazer"),
    ("parque diversoes", "Lazer"),
    // Educacao
    ("curso online", "Educacao"),
    ("faculdade mensalidade", "Educacao"),
    ("livros escolares", "Educacao"),
    // Vestuario
    ("roupa loja", "Vestuario"),
    ("tenis esporte", "Vestuario"),
    ("sapato social", "Vestuario"),
    // Servicos
    ("salao de beleza", "Servicos"),
    ("barbearia", "Servicos"),
    ("lavanderia", "Servicos"),
    ("manutencao carro", "Servicos"),
    // Pets
    ("petshop racao", "Pets"),
    ("veterinario", "Pets"),
    // Viagem
    ("passagem aerea", "Viagem"),
    ("hotel reserva", "Viagem"),
    ("airbnb", "Viagem"),
    // Assinaturas
    ("amazon prime", "Assinaturas"),
    ("google drive", "Assinaturas"),
    ("office 365", "Assinaturas"),
    // Impostos
    ("taxa bancaria", "Impostos"),
    ("multa transito", "Impostos"),
    ("imposto renda", "Impostos"),
    // Investimentos
    ("aplicacao tesouro direto", "Investimentos"),
    ("corretora aporte", "Investimentos"),
    // Transferencias
    ("pix para amigo", "Transferencias"),
    ("transferencia bancaria", "Transferencias"),
    // Outros
    ("presente aniversario", "Outros"),
    ("doacao ong", "Outros"),
];

/// The embedded seed examples, in their fixed order.
pub fn seed_examples() -> Vec<TrainingExample> {
    SEED.iter()
        .map(|(text, label)| TrainingExample::new(*text, *label))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seed_is_nonempty_and_labeled() {
        let seed = seed_examples();
        assert!(seed.len() >= 60);
        assert!(seed.iter().all(|e| !e.text.is_empty() && !e.label.is_empty()));
    }

    #[test]
    fn seed_covers_multiple_categories() {
        let labels: std::collections::HashSet<_> =
            seed_examples().into_iter().map(|e| e.label).collect();
        assert!(labels.len() >= 10);
        assert!(labels.contains("Transporte"));
        assert!(labels.contains("Saude"));
    }
}
