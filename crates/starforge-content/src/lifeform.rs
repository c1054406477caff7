//! Lifeform generation.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use sha2::{Digest, Sha256};
use starforge_types::{
    Anatomy, Biome, BiomeId, BiomeType, Complexity, Ecology, Genetics, LifeDomain, Lifeform, LifeformId,
    Physiology, ReproductionType, TrophicLevel,
};

use crate::catalog::{
    self, ACTIVITY_CYCLES, AUTOTROPH_METABOLISMS, BODY_PLANS, COMPLEXITY_WEIGHTS,
    CONSUMER_METABOLISMS, COVERINGS, GENOME_TYPES, HABITAT_NICHES, RESPIRATION_MODES, SENSES,
    SOCIAL_BEHAVIORS, SPECIAL_ABILITIES, SYMMETRIES, THERMOREGULATION,
};
use crate::content_id::short_hash;
use crate::sample::{clamp01, pick_tag, pick_variant, pick_weighted, sample_tags, uniform};

/// Digest bytes in a lifeform name (10 hex characters).
const NAME_HASH_BYTES: usize = 5;

/// Digest bytes in a lifeform id (12 hex characters).
const ID_HASH_BYTES: usize = 6;

/// Generate one lifeform belonging to the given biome.
pub fn generate_lifeform<R: Rng + ?Sized>(
    rng: &mut R,
    base_type: BiomeType,
    biome_id: &BiomeId,
) -> Lifeform {
    let domain = pick_variant(rng, LifeDomain::ALL, LifeDomain::Eukarya);
    let trophic_level = pick_variant(rng, TrophicLevel::ALL, TrophicLevel::Autotroph);
    let reproduction_type = pick_variant(rng, ReproductionType::ALL, ReproductionType::Asexual);
    let complexity = pick_weighted(rng, COMPLEXITY_WEIGHTS).unwrap_or(Complexity::Simple);

    let lifespan = catalog::lifespan_bounds(complexity);
    let lifespan_years = uniform(rng, lifespan.min, lifespan.max);
    let size = catalog::adult_size_bounds(complexity);
    let adult_size_kg = uniform(rng, size.min, size.max);

    let anatomy = generate_anatomy(rng, complexity);
    let physiology = generate_physiology(rng, trophic_level);
    let genetics = Genetics {
        genome_type: pick_tag(rng, GENOME_TYPES),
        chromosome_count: rng.random_range(1..=120),
        mutation_rate: uniform(rng, 0.0001, 0.2),
    };
    let ecology = Ecology {
        habitat_niche: pick_tag(rng, HABITAT_NICHES),
        activity_cycle: pick_tag(rng, ACTIVITY_CYCLES),
        social_behavior: pick_tag(rng, SOCIAL_BEHAVIORS),
        population_density: uniform(rng, 0.0, 1.0),
    };
    let special_abilities = sample_tags(rng, SPECIAL_ABILITIES, 0, 2);

    let key = format!(
        "biome={biome_id};domain={};trophic={};reproduction={};complexity={};lifespan={lifespan_years:?};size={adult_size_kg:?};body={};metabolism={};genome={}/{};abilities={}",
        domain.as_str(),
        trophic_level.as_str(),
        reproduction_type.as_str(),
        complexity.as_str(),
        anatomy.body_plan,
        physiology.metabolism,
        genetics.genome_type,
        genetics.chromosome_count,
        special_abilities.join(","),
    );
    let name = format!(
        "{}_life_{}",
        base_type.title(),
        short_hash(&key, NAME_HASH_BYTES)
    );
    let id = LifeformId::from(format!("life_{}", short_hash(&key, ID_HASH_BYTES)));

    Lifeform {
        id,
        biome_id: biome_id.clone(),
        name,
        domain,
        trophic_level,
        reproduction_type,
        lifespan_years,
        adult_size_kg,
        complexity,
        anatomy,
        physiology,
        genetics,
        ecology,
        special_abilities,
    }
}

fn generate_anatomy<R: Rng + ?Sized>(rng: &mut R, complexity: Complexity) -> Anatomy {
    let (body_plan, limb_count) = if complexity == Complexity::Microbial {
        (String::from("unicellular"), 0)
    } else {
        (pick_tag(rng, BODY_PLANS), rng.random_range(0..=12))
    };
    Anatomy {
        body_plan,
        symmetry: pick_tag(rng, SYMMETRIES),
        limb_count,
        covering: pick_tag(rng, COVERINGS),
        senses: sample_tags(rng, SENSES, 1, 3),
    }
}

fn generate_physiology<R: Rng + ?Sized>(rng: &mut R, trophic_level: TrophicLevel) -> Physiology {
    let metabolism = if trophic_level == TrophicLevel::Autotroph {
        pick_tag(rng, AUTOTROPH_METABOLISMS)
    } else {
        pick_tag(rng, CONSUMER_METABOLISMS)
    };
    Physiology {
        metabolism,
        respiration: pick_tag(rng, RESPIRATION_MODES),
        thermoregulation: pick_tag(rng, THERMOREGULATION),
        metabolic_rate: uniform(rng, 0.0, 1.0),
    }
}

/// The lifeform roster of `biome`: [`lifeform_count`] lifeforms drawn from
/// a generator seeded by the biome id.
///
/// A biome id always yields the same roster, whichever universe or draw
/// order produced the biome.
pub fn generate_biome_lifeforms(biome: &Biome) -> Vec<Lifeform> {
    let seed: [u8; 32] = Sha256::digest(biome.id.as_str().as_bytes()).into();
    let mut rng = StdRng::from_seed(seed);
    (0..lifeform_count(biome.biodiversity))
        .map(|_| generate_lifeform(&mut rng, biome.base_type, &biome.id))
        .collect()
}

/// Number of lifeforms a biome supports: `2 + floor(biodiversity * 8)`.
pub fn lifeform_count(biodiversity: f64) -> usize {
    // Clamped to [0, 8] before the cast, so the conversion cannot truncate or wrap.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let extra = (clamp01(biodiversity) * 8.0).floor() as usize;
    extra.saturating_add(2)
}
