use pet_passport_client::{
    accounts::{
        build_instruction,
        InstructionAccounts,
        OwnerMutation,
    },
    context::passport::PassportContext,
    pda::find_metadata_address,
};
use pet_passport_interface::{
    discriminators::Discriminators,
    ids::{
        METADATA_PROGRAM_ID,
        RENT_SYSVAR_ID,
        SYSTEM_PROGRAM_ID,
        TOKEN_PROGRAM_ID,
    },
    instructions::{
        AddVaccinationRecordInstructionData,
        CreatePetPassportInstructionData,
        PetPassportInstructionData,
    },
    pack::Pack,
    state::records::RecordKind,
};
use solana_address::Address;
use solana_instruction::AccountMeta;

fn address(byte: u8) -> Address {
    Address::new_from_array([byte; 32])
}

#[test]
fn create_accounts_are_in_program_order() {
    let ctx = PassportContext::default();
    let (owner, pet_data, mint) = (address(1), address(2), address(3));
    let data = CreatePetPassportInstructionData::new("Fluffy", "Cat", "Persian", 1_625_097_600);

    let ix = ctx.create_pet_passport(owner, pet_data, mint, &data);
    let (metadata, _) = find_metadata_address(&mint);
    assert_eq!(
        ix.accounts,
        vec![
            AccountMeta::new(pet_data, true),
            AccountMeta::new(owner, true),
            AccountMeta::new_readonly(SYSTEM_PROGRAM_ID, false),
            AccountMeta::new(mint, true),
            AccountMeta::new(metadata, false),
            AccountMeta::new_readonly(TOKEN_PROGRAM_ID, false),
            AccountMeta::new_readonly(RENT_SYSVAR_ID, false),
            AccountMeta::new_readonly(METADATA_PROGRAM_ID, false),
        ]
    );
    assert_eq!(ix.program_id, pet_passport_interface::program::ID);
    assert_eq!(
        PetPassportInstructionData::unpack(&ix.data, &Discriminators::PET_PASSPORT),
        Ok(PetPassportInstructionData::CreatePetPassport(data))
    );
}

#[test]
fn metadata_account_is_derived_from_the_mint() {
    let ctx = PassportContext::default();
    let data = CreatePetPassportInstructionData::new("Rex", "Dog", "Beagle", 0);
    let first = ctx.create_pet_passport(address(1), address(2), address(3), &data);
    let again = ctx.create_pet_passport(address(9), address(8), address(3), &data);
    let other_mint = ctx.create_pet_passport(address(1), address(2), address(4), &data);

    assert_eq!(first.accounts[4], again.accounts[4]);
    assert_ne!(first.accounts[4], other_mint.accounts[4]);
}

#[test]
fn appends_sign_with_the_owner_only() {
    let ctx = PassportContext::default();
    let data = AddVaccinationRecordInstructionData::new("Rabies", 1, 2, "Dr. V");
    let ix = ctx.add_vaccination_record(address(2), address(1), &data);

    assert_eq!(
        ix.accounts,
        vec![
            AccountMeta::new(address(2), false),
            AccountMeta::new_readonly(address(1), true),
        ]
    );
    assert_eq!(&ix.data[..8], &Discriminators::PET_PASSPORT.add_vaccination_record);
}

#[test]
fn verify_is_signed_by_the_verifier() {
    let ctx = PassportContext::default();
    let ix = ctx.verify_record(address(2), address(7), RecordKind::Vaccination, 0);

    assert_eq!(ix.accounts[1], AccountMeta::new_readonly(address(7), true));
    assert!(ix.accounts[0].is_writable && !ix.accounts[0].is_signer);
}

#[test]
fn generic_builder_matches_context() {
    let ctx = PassportContext::default();
    let data = AddVaccinationRecordInstructionData::new("FVRCP", 10, 20, "Dr. W");
    let accounts = OwnerMutation {
        pet_data: address(2),
        owner: address(1),
    };

    let manual = build_instruction(
        ctx.program_id,
        accounts.account_metas(),
        [
            &Discriminators::PET_PASSPORT.add_vaccination_record[..],
            &data.pack()[..],
        ]
        .concat(),
    );
    assert_eq!(manual, ctx.add_vaccination_record(address(2), address(1), &data));
}
