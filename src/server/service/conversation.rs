use crate::server::{
    data::store::EntityStore,
    error::AppError,
    model::{
        conversation::{
            Conversation, ConversationDetail, ConversationLookup, ConversationSummary,
            ProgramSummary, ACTIVE_STATE,
        },
        people::PeopleLookup,
    },
};

pub struct ConversationService<'a> {
    store: &'a dyn EntityStore,
}

impl<'a> ConversationService<'a> {
    pub fn new(store: &'a dyn EntityStore) -> Self {
        Self { store }
    }

    /// Gets every conversation row ordered by id
    pub async fn list(&self) -> Result<Vec<Conversation>, AppError> {
        self.store.list_conversations().await
    }

    /// Resolves the latest row of a conversation and loads its message timeline.
    ///
    /// The party number of the conversation's person is included so callers can
    /// correlate the conversation with the external party without a second request.
    ///
    /// # Arguments
    /// - `lookup` - External id or lead id of the conversation
    ///
    /// # Returns
    /// - `Ok(ConversationDetail)` - Latest row with messages in timeline order
    /// - `Err(AppError::StoreErr(NotFound))` - No conversation matches `lookup`
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn detail(&self, lookup: &ConversationLookup) -> Result<ConversationDetail, AppError> {
        let conversation = self.store.find_latest_conversation(lookup).await?;
        let people = self.store.find_people_by_id(conversation.people_id).await?;
        let messages = self
            .store
            .messages_of_conversation(&conversation.external_id)
            .await?;

        Ok(ConversationDetail {
            conversation,
            people_party_number: people.party_number,
            messages,
        })
    }

    /// Summarizes the CRM programs a person has conversations in.
    ///
    /// Conversations without a CRM code are skipped. Programs are ordered by last
    /// activity, most recent first, with programs lacking dated messages last and ties
    /// broken by CRM code.
    ///
    /// # Returns
    /// - `Ok(Vec<ProgramSummary>)` - One summary per CRM code, empty when none
    /// - `Err(AppError::StoreErr(NotFound))` - No person with `party_number`
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn programs_of_people(
        &self,
        party_number: i64,
    ) -> Result<Vec<ProgramSummary>, AppError> {
        let people = self
            .store
            .find_people(&PeopleLookup::PartyNumber(party_number))
            .await?;
        let conversations = self.store.conversations_of_people(people.id).await?;

        let mut programs: Vec<ProgramSummary> = Vec::new();
        for conversation in conversations {
            let Some(crm_code) = conversation.crm_code.clone().filter(|code| !code.is_empty())
            else {
                continue;
            };

            let index = match programs.iter().position(|p| p.crm_code == crm_code) {
                Some(index) => index,
                None => {
                    programs.push(ProgramSummary {
                        crm_code,
                        total_conversations: 0,
                        active_conversations: 0,
                        last_activity: None,
                        lead_ids: Vec::new(),
                    });
                    programs.len() - 1
                }
            };

            let sent_at = self
                .store
                .last_message(&conversation.external_id)
                .await?
                .and_then(|message| message.sent_at);

            let program = &mut programs[index];
            program.total_conversations += 1;
            if conversation.state.as_deref() == Some(ACTIVE_STATE) {
                program.active_conversations += 1;
            }
            program.last_activity = program.last_activity.max(sent_at);
            if let Some(lead_id) = conversation.lead_id.filter(|id| !id.is_empty()) {
                if !program.lead_ids.contains(&lead_id) {
                    program.lead_ids.push(lead_id);
                }
            }
        }

        programs.sort_by(|a, b| {
            b.last_activity
                .cmp(&a.last_activity)
                .then_with(|| a.crm_code.cmp(&b.crm_code))
        });

        Ok(programs)
    }

    /// Summarizes a person's conversations within one CRM program, most recently
    /// updated first.
    ///
    /// # Returns
    /// - `Ok(Vec<ConversationSummary>)` - Summaries, empty when the program has none
    /// - `Err(AppError::StoreErr(NotFound))` - No person with `party_number`
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn program_conversations(
        &self,
        party_number: i64,
        crm_code: &str,
    ) -> Result<Vec<ConversationSummary>, AppError> {
        let people = self
            .store
            .find_people(&PeopleLookup::PartyNumber(party_number))
            .await?;
        let conversations = self
            .store
            .conversations_of_program(people.id, crm_code)
            .await?;

        self.summarize(conversations).await
    }

    /// Summarizes the conversations linked to a lead, most recently updated first.
    ///
    /// An unknown lead yields an empty list.
    pub async fn lead_conversations(
        &self,
        lead_id: &str,
    ) -> Result<Vec<ConversationSummary>, AppError> {
        let conversations = self.store.conversations_of_lead(lead_id).await?;

        self.summarize(conversations).await
    }

    async fn summarize(
        &self,
        conversations: Vec<Conversation>,
    ) -> Result<Vec<ConversationSummary>, AppError> {
        let mut summaries = Vec::with_capacity(conversations.len());
        for conversation in conversations {
            let total_messages = self.store.count_messages(&conversation.external_id).await?;
            let last = self.store.last_message(&conversation.external_id).await?;
            summaries.push(ConversationSummary::new(conversation, total_messages, last));
        }

        Ok(summaries)
    }
}
